//! Filename generation.

use std::path::Path;

use crate::entity::{check_types, Entities};
use crate::error::{Error, Result};

/// Create a BIDS filename from its component parts.
///
/// Present entities are written as `key-value` tokens joined by `_`, always in
/// the order subject, session, task, acquisition, run, processing, recording.
/// Without a suffix the result is a prefix shared by every file of a
/// recording; `suffix` (e.g. `"meg.fif"`) completes it. `prefix` is joined in
/// front as a path, e.g. the folder the file will live in.
///
/// Nothing is read from or written to disk.
///
/// ```
/// use bids_naming::{make_bids_filename, Entities};
///
/// let entities = Entities::new().subject("test").session("two").task("mytask");
/// let name = make_bids_filename(&entities, Some("data.csv"), None).unwrap();
/// assert_eq!(name, "sub-test_ses-two_task-mytask_data.csv");
/// ```
pub fn make_bids_filename(
    entities: &Entities,
    suffix: Option<&str>,
    prefix: Option<&str>,
) -> Result<String> {
    let order = entities.ordered();

    check_types(
        order
            .iter()
            .map(|(entity, value)| (entity.name(), value.as_ref())),
    )?;

    if order.iter().all(|(_, value)| value.is_none()) {
        return Err(Error::NoEntities);
    }

    let mut parts: Vec<String> = order
        .iter()
        .filter_map(|(entity, value)| {
            value
                .as_ref()
                .map(|value| format!("{}-{}", entity.key(), value))
        })
        .collect();

    if let Some(suffix) = suffix {
        parts.push(suffix.to_string());
    }

    let filename = parts.join("_");
    let filename = match prefix {
        Some(prefix) => Path::new(prefix)
            .join(&filename)
            .to_string_lossy()
            .into_owned(),
        None => filename,
    };

    tracing::debug!("Built filename: {}", filename);
    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_make_bids_filename_with_suffix() {
        let entities = Entities::new().subject("test").session("two").task("mytask");
        assert_eq!(
            make_bids_filename(&entities, Some("data.csv"), None).unwrap(),
            "sub-test_ses-two_task-mytask_data.csv"
        );
    }

    #[test]
    fn test_make_bids_filename_without_suffix() {
        let entities = Entities::new().subject("01").task("rest");
        assert_eq!(
            make_bids_filename(&entities, None, None).unwrap(),
            "sub-01_task-rest"
        );
    }

    #[test]
    fn test_make_bids_filename_order_independent_of_setters() {
        let entities = Entities::new()
            .recording("ecg")
            .processing("sss")
            .run(1)
            .acquisition("lowres")
            .task("audvis")
            .session("01")
            .subject("02");
        assert_eq!(
            make_bids_filename(&entities, Some("meg.fif"), None).unwrap(),
            "sub-02_ses-01_task-audvis_acq-lowres_run-01_proc-sss_recording-ecg_meg.fif"
        );
    }

    #[test]
    fn test_make_bids_filename_run_padding() {
        let name = |run: i32| {
            make_bids_filename(&Entities::new().subject("01").run(run), None, None)
        };
        assert_eq!(name(7).unwrap(), "sub-01_run-07");
        assert_eq!(name(12).unwrap(), "sub-01_run-12");

        // Text runs are used as given
        let entities = Entities::new().subject("01").run("3");
        assert_eq!(
            make_bids_filename(&entities, None, None).unwrap(),
            "sub-01_run-3"
        );
    }

    #[test]
    fn test_make_bids_filename_with_prefix() {
        let entities = Entities::new().subject("01").session("02");
        assert_eq!(
            make_bids_filename(&entities, Some("scans.tsv"), Some("bids/sub-01/ses-02")).unwrap(),
            "bids/sub-01/ses-02/sub-01_ses-02_scans.tsv"
        );
    }

    #[test]
    fn test_make_bids_filename_rejects_integer_label() {
        let entities = Entities::new().subject(5);
        let err = make_bids_filename(&entities, None, None).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidType { ref field, .. } if field == "subject"
        ));
    }

    #[test]
    fn test_make_bids_filename_rejects_list_input() {
        let err = Entities::from_json(&json!({"task": ["a", "b"]})).unwrap_err();
        assert!(matches!(err, Error::InvalidType { .. }));
    }

    #[test]
    fn test_make_bids_filename_requires_an_entity() {
        let err = make_bids_filename(&Entities::new(), Some("data.csv"), None).unwrap_err();
        assert!(matches!(err, Error::NoEntities));
    }
}
