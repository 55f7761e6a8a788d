use crate::domain::event::{ScriptStep, UiEvent};
use crate::domain::ports::{ElementId, EventSource};
use crate::error::{FlowError, Result};
use async_trait::async_trait;
use csv::StringRecord;
use std::io::Read;
use std::time::Duration;

/// One raw line of a script: `event,target,value`.
#[derive(Debug)]
struct ScriptRow {
    event: String,
    target: String,
    value: String,
}

impl From<&StringRecord> for ScriptRow {
    fn from(record: &StringRecord) -> Self {
        let field = |index: usize| record.get(index).unwrap_or_default().to_string();
        Self {
            event: field(0),
            target: field(1),
            value: field(2),
        }
    }
}

impl ScriptRow {
    fn target(&self) -> Result<ElementId> {
        self.target
            .parse()
            .map_err(|e: String| FlowError::ScriptError(format!("{} event: {e}", self.event)))
    }
}

impl TryFrom<ScriptRow> for ScriptStep {
    type Error = FlowError;

    fn try_from(row: ScriptRow) -> Result<Self> {
        let event = match row.event.as_str() {
            "input" => UiEvent::Input {
                target: row.target()?,
                value: row.value,
            },
            "click" => UiEvent::Click {
                target: row.target()?,
            },
            "keydown" => UiEvent::KeyDown { key: row.value },
            "touchstart" => UiEvent::TouchStart {
                target: row.target()?,
            },
            "wait" => {
                let millis: u64 = row.value.parse().map_err(|_| {
                    FlowError::ScriptError(format!("wait needs milliseconds, got {:?}", row.value))
                })?;
                return Ok(ScriptStep::Wait(Duration::from_millis(millis)));
            }
            other => {
                return Err(FlowError::ScriptError(format!("unknown event {other:?}")));
            }
        };
        Ok(ScriptStep::Dispatch(event))
    }
}

/// Reads interaction steps from a CSV script.
///
/// Whitespace around fields is trimmed and trailing columns may be omitted,
/// so `click, actionButton` is a complete row.
pub struct ScriptReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ScriptReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily parses the script, one `Result` per row.
    pub fn steps(self) -> impl Iterator<Item = Result<ScriptStep>> {
        self.reader.into_records().map(|record| -> Result<ScriptStep> {
            let record = record?;
            ScriptStep::try_from(ScriptRow::from(&record))
        })
    }
}

impl<R: Read + Send + 'static> ScriptReader<R> {
    pub fn into_source(self) -> ScriptSource {
        ScriptSource {
            steps: Box::new(self.steps()),
        }
    }
}

/// A parsed script exposed as an [`EventSource`].
pub struct ScriptSource {
    steps: Box<dyn Iterator<Item = Result<ScriptStep>> + Send>,
}

#[async_trait]
impl EventSource for ScriptSource {
    async fn next_step(&mut self) -> Result<Option<ScriptStep>> {
        self.steps.next().transpose()
    }
}
