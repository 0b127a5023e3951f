use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::builder::BuilderError;

/// The details of a saved Bert model.
///
/// Read from the `model.json` asset of a model directory. Only the casing and the sequence length
/// are relevant for the encoding, the tensor names are meant for the inference engine which runs
/// the model.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDetails {
    /// Whether the model expects lowercased sequences without accents.
    pub do_lower_case: bool,
    /// The number of tokens per encoded sequence, including the special tokens.
    pub max_sequence_length: usize,
    pub input_ids: Option<String>,
    pub input_mask: Option<String>,
    pub segment_ids: Option<String>,
    pub pooled_output: Option<String>,
    pub sequence_output: Option<String>,
}

impl ModelDetails {
    /// Creates model details without tensor names.
    pub fn new(do_lower_case: bool, max_sequence_length: usize) -> Self {
        Self {
            do_lower_case,
            max_sequence_length,
            input_ids: None,
            input_mask: None,
            segment_ids: None,
            pooled_output: None,
            sequence_output: None,
        }
    }

    /// Parses the model details from json.
    pub fn from_reader(details: impl Read) -> Result<Self, BuilderError> {
        serde_json::from_reader(details).map_err(Into::into)
    }

    /// Reads the model details from a json file.
    pub fn from_file(details: impl AsRef<Path>) -> Result<Self, BuilderError> {
        Self::from_reader(BufReader::new(File::open(details)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reader() {
        let details = r#"{
            "doLowerCase": true,
            "inputIds": "input_ids:0",
            "inputMask": "input_mask:0",
            "segmentIds": "segment_ids:0",
            "pooledOutput": "pooled:0",
            "sequenceOutput": "sequence:0",
            "maxSequenceLength": 128
        }"#;
        let details = ModelDetails::from_reader(details.as_bytes()).unwrap();
        assert!(details.do_lower_case);
        assert_eq!(details.max_sequence_length, 128);
        assert_eq!(details.input_ids.as_deref(), Some("input_ids:0"));
        assert_eq!(details.sequence_output.as_deref(), Some("sequence:0"));
    }

    #[test]
    fn test_from_reader_minimal() {
        let details = r#"{"doLowerCase": false, "maxSequenceLength": 64}"#;
        assert_eq!(
            ModelDetails::from_reader(details.as_bytes()).unwrap(),
            ModelDetails::new(false, 64),
        );
    }

    #[test]
    fn test_from_reader_invalid() {
        let details = r#"{"doLowerCase": "yes", "maxSequenceLength": 64}"#;
        assert!(matches!(
            ModelDetails::from_reader(details.as_bytes()),
            Err(BuilderError::Details(_)),
        ));
        assert!(matches!(
            ModelDetails::from_reader(r#"{"doLowerCase": true}"#.as_bytes()),
            Err(BuilderError::Details(_)),
        ));
    }

    #[test]
    fn test_from_file_missing() {
        assert!(matches!(
            ModelDetails::from_file("missing/model.json"),
            Err(BuilderError::DataFile(_)),
        ));
    }
}
