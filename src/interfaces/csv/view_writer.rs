use crate::error::Result;
use crate::infrastructure::recording_view::RecordingView;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct ViewRow<'a> {
    element: String,
    text: &'a str,
    value: &'a str,
    classes: String,
    src: &'a str,
}

/// Writes a snapshot of a [`RecordingView`] as CSV, one row per element.
pub struct ViewWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ViewWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Columns: `element,text,value,classes,src`; classes are space separated.
    pub fn write_view(&mut self, view: &RecordingView) -> Result<()> {
        for (id, state) in view.elements() {
            let classes: Vec<&str> = state.classes.iter().map(String::as_str).collect();
            self.writer.serialize(ViewRow {
                element: id.to_string(),
                text: &state.text,
                value: &state.value,
                classes: classes.join(" "),
                src: state.image_source.as_deref().unwrap_or(""),
            })?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
