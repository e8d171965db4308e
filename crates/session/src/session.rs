//! The label session
//!
//! Owns the form, the preview, the print queue, presets, layouts and print
//! settings, and writes presets and layouts back to the store after every
//! change. Persistence failures are logged; in-memory state stays current.

use crate::model::ExtractionModel;
use crate::source::PdfTextSource;
use crate::store::{save_layouts, save_presets, KeyValueStore, PersistedState};
use crate::{Result, SessionConfig, SessionError};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use label_core::{
    build_extraction_prompt, fold_rows, parse_model_output, FormField, FormState, Label, LabelForm,
    PlywoodType, PrintQueue, RememberedLabels, ALL_QUALITIES,
};
use label_template::{
    ElementStyle, LabelElement, LabelLayout, LayoutLibrary, PrintFormat, PrintRenderer,
    SheetArrangement, INITIAL_LAYOUT_ID,
};
use tracing::{info, warn};

const DEFAULT_COPIES: u32 = 2;

pub struct Session<S: KeyValueStore> {
    store: S,
    config: SessionConfig,
    form: LabelForm,
    preview: Option<Label>,
    queue: PrintQueue,
    presets: RememberedLabels,
    /// Index into the sorted preset list
    active_preset: Option<usize>,
    layouts: LayoutLibrary,
    layout: LabelLayout,
    selected_layout_id: String,
    print_format: &'static PrintFormat,
    copies: u32,
    status: Option<String>,
}

impl<S: KeyValueStore> Session<S> {
    /// Open a session over `store`, activating the default layout if it exists
    pub fn open(store: S, config: SessionConfig) -> Self {
        let (presets, layouts) = PersistedState::load(&store).into_parts();
        let (selected_layout_id, layout) = layouts.startup_layout();

        Self {
            store,
            config,
            form: LabelForm::new(),
            preview: None,
            queue: PrintQueue::new(),
            presets,
            active_preset: None,
            layouts,
            layout,
            selected_layout_id,
            print_format: PrintFormat::default_format(),
            copies: DEFAULT_COPIES,
            status: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn form(&self) -> &LabelForm {
        &self.form
    }

    /// The last generated label, not yet queued
    pub fn preview(&self) -> Option<&Label> {
        self.preview.as_ref()
    }

    pub fn queue(&self) -> &PrintQueue {
        &self.queue
    }

    /// Presets in display order
    pub fn presets(&self) -> Vec<&FormState> {
        self.presets.sorted()
    }

    pub fn active_preset(&self) -> Option<usize> {
        self.active_preset
    }

    pub fn layouts(&self) -> &LayoutLibrary {
        &self.layouts
    }

    /// The layout in effect
    pub fn layout(&self) -> &LabelLayout {
        &self.layout
    }

    pub fn selected_layout_id(&self) -> &str {
        &self.selected_layout_id
    }

    pub fn print_format(&self) -> &'static PrintFormat {
        self.print_format
    }

    pub fn copies(&self) -> u32 {
        self.copies
    }

    /// Status of the last analysis
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    // Form editing detaches the form from any selected preset.

    pub fn set_field(&mut self, field: FormField, value: &str) {
        self.form.set_field(field, value);
        self.after_form_edit();
    }

    pub fn set_type(&mut self, plywood_type: Option<PlywoodType>) {
        self.form.set_type(plywood_type);
        self.after_form_edit();
    }

    pub fn edit_code(&mut self, code: &str) {
        self.form.edit_code(code);
        self.after_form_edit();
    }

    pub fn set_manual(&mut self, manual: bool) {
        self.form.set_manual(manual);
    }

    fn after_form_edit(&mut self) {
        self.preview = None;
        self.status = None;
        self.active_preset = None;
    }

    /// Finalize the form into the preview label, optionally remembering it
    pub fn generate_label(&mut self, remember: bool, today: NaiveDate) -> Result<&Label> {
        let label = self.form.finalize(today)?;
        self.status = None;

        if remember && self.presets.remember(self.form.state().clone()) {
            self.persist_presets();
        }

        Ok(&*self.preview.insert(label))
    }

    /// Move the preview label to the end of the queue
    pub fn add_preview_to_queue(&mut self) -> Result<()> {
        let label = self.preview.take().ok_or_else(|| {
            SessionError::Validation("Generate a label first before adding to queue.".to_string())
        })?;
        self.queue.push(label);
        self.status = None;
        Ok(())
    }

    pub fn remove_from_queue(&mut self, index: usize) -> Option<Label> {
        self.queue.remove(index)
    }

    /// Load the preset at `index` of the sorted list
    pub fn select_preset(&mut self, index: usize) -> Result<()> {
        let preset = self
            .presets
            .sorted()
            .get(index)
            .map(|preset| (*preset).clone())
            .ok_or_else(|| SessionError::Validation(format!("No remembered label at {index}")))?;

        self.form.load_preset(&preset);
        self.active_preset = Some(index);
        self.preview = None;
        self.status = None;
        Ok(())
    }

    /// Deselect the preset and reset the form
    pub fn clear_preset(&mut self) {
        self.active_preset = None;
        self.form.reset();
        self.preview = None;
        self.status = None;
    }

    /// Delete the selected preset (and any identical entries)
    pub fn delete_selected_preset(&mut self) -> Result<()> {
        let preset = self
            .active_preset
            .and_then(|index| self.presets.sorted().get(index).map(|p| (*p).clone()))
            .ok_or_else(|| {
                SessionError::Validation("Please select a remembered label to delete.".to_string())
            })?;

        self.presets.remove(&preset);
        self.persist_presets();
        self.clear_preset();
        Ok(())
    }

    pub fn update_element(&mut self, element: LabelElement, style: ElementStyle) {
        self.layout.set(element, style);
    }

    /// Save the current layout under `name`; returns the new layout id
    pub fn save_layout(&mut self, name: &str) -> Result<String> {
        let id = self.next_layout_id();
        let saved = self.layouts.save(&id, name, &self.layout)?;
        info!(id = %saved.id, name = %saved.name, "saved layout");

        self.selected_layout_id = id.clone();
        self.persist_layouts();
        Ok(id)
    }

    /// Activate a saved layout, or the initial layout for `"initial"`
    pub fn select_layout(&mut self, id: &str) -> Result<()> {
        let layout = self
            .layouts
            .select(id)
            .ok_or_else(|| SessionError::Validation(format!("Unknown layout: {id}")))?;
        self.layout = layout;
        self.selected_layout_id = id.to_string();
        Ok(())
    }

    /// Make the selected layout the startup default
    pub fn set_default_layout(&mut self) -> Result<()> {
        let id = self.selected_layout_id.clone();
        self.layouts.set_default(&id)?;
        self.persist_layouts();
        Ok(())
    }

    /// Delete the selected layout and fall back to the initial layout
    pub fn delete_layout(&mut self) -> Result<()> {
        if self.selected_layout_id == INITIAL_LAYOUT_ID {
            return Err(SessionError::Validation(
                "Please select a saved layout to delete.".to_string(),
            ));
        }

        let id = self.selected_layout_id.clone();
        self.layouts.delete(&id)?;
        self.selected_layout_id = INITIAL_LAYOUT_ID.to_string();
        self.layout = LabelLayout::initial();
        self.persist_layouts();
        Ok(())
    }

    pub fn set_print_format(&mut self, name: &str) -> Result<()> {
        self.print_format = PrintFormat::find(name)
            .ok_or_else(|| SessionError::Validation(format!("Unknown print format: {name}")))?;
        Ok(())
    }

    pub fn set_copies(&mut self, copies: u32) {
        self.copies = copies;
    }

    /// Read an order PDF with the model and queue its labels
    ///
    /// On success the form holds the first row and the status report is
    /// returned. On failure the status holds the error message and neither
    /// the form nor the queue is touched.
    pub async fn analyze_pdf<P, M>(
        &mut self,
        bytes: &[u8],
        source: &P,
        model: &M,
        today: NaiveDate,
    ) -> Result<String>
    where
        P: PdfTextSource + ?Sized,
        M: ExtractionModel + ?Sized,
    {
        self.preview = None;
        self.status = None;

        match self.run_analysis(bytes, source, model, today).await {
            Ok(status) => {
                self.status = Some(status.clone());
                Ok(status)
            }
            Err(e) => {
                warn!(error = %e, "PDF analysis failed");
                self.status = Some(e.to_string());
                Err(e)
            }
        }
    }

    async fn run_analysis<P, M>(
        &mut self,
        bytes: &[u8],
        source: &P,
        model: &M,
        today: NaiveDate,
    ) -> Result<String>
    where
        P: PdfTextSource + ?Sized,
        M: ExtractionModel + ?Sized,
    {
        let text = source.extract_text(bytes)?;
        if text.trim().is_empty() {
            return Err(SessionError::NoText);
        }

        let prompt = build_extraction_prompt(&text, ALL_QUALITIES);
        let raw = model.generate(&prompt).await?;
        let rows = parse_model_output(&raw)?;

        let outcome = fold_rows(&rows, self.form.state().plywood_type, today);
        if let Some(first) = outcome.first_item.clone() {
            self.form.populate(first);
        }
        self.queue.extend(outcome.labels.iter().cloned());
        self.active_preset = None;

        info!(
            rows = outcome.rows,
            labels = outcome.labels.len(),
            skipped = outcome.skipped,
            "PDF analyzed"
        );
        Ok(outcome.status_message())
    }

    fn renderer(&self) -> PrintRenderer<'_> {
        PrintRenderer::new(&self.layout, self.print_format)
            .with_arrangement(SheetArrangement::from_copies(self.copies))
            .with_contact(self.config.contact.clone())
            .with_background(self.config.background_url.clone())
    }

    /// Print document for the preview label
    pub fn render_label(&self) -> Result<String> {
        let label = self.preview.as_ref().ok_or_else(|| {
            SessionError::Validation("Generate a label first before printing.".to_string())
        })?;
        Ok(self.renderer().render_label(label))
    }

    /// Print document for the whole queue
    pub fn render_queue(&self) -> Result<String> {
        Ok(self.renderer().render_labels(self.queue.labels())?)
    }

    /// Verification list of the queue
    pub fn render_queue_list(&self, generated_at: NaiveDateTime) -> Result<String> {
        Ok(self
            .renderer()
            .render_queue_list(self.queue.labels(), generated_at)?)
    }

    /// Return to a fresh session; saved layouts and presets are kept
    pub fn reset_all(&mut self) {
        self.form.reset();
        self.preview = None;
        self.queue.clear();
        self.copies = DEFAULT_COPIES;
        self.print_format = PrintFormat::default_format();
        self.active_preset = None;
        self.status = None;
        self.layout = LabelLayout::initial();
        self.selected_layout_id = INITIAL_LAYOUT_ID.to_string();

        if self.layouts.default_id().is_some() {
            self.layouts.clear_default();
            self.persist_layouts();
        }
    }

    fn next_layout_id(&self) -> String {
        let mut millis = Utc::now().timestamp_millis();
        while self.layouts.find(&millis.to_string()).is_some() {
            millis += 1;
        }
        millis.to_string()
    }

    fn persist_presets(&mut self) {
        if let Err(e) = save_presets(&mut self.store, &self.presets) {
            warn!(error = %e, "failed to persist remembered labels");
        }
    }

    fn persist_layouts(&mut self) {
        if let Err(e) = save_layouts(&mut self.store, &self.layouts) {
            warn!(error = %e, "failed to persist layouts");
        }
    }
}
