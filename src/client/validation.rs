//! Local input checks. Every check runs before any network I/O.

use crate::content::Content;
use crate::types::{ClassifyOptions, GroundTruth, MAX_DESCRIPTION_CHARS, MAX_LABELS, MIN_LABELS};
use crate::{Error, ErrorContext, Result};

fn invalid(message: &str, field: &str, details: Option<String>) -> Error {
    let mut context = ErrorContext::new()
        .with_field_path(field)
        .with_source("request_validator");
    if let Some(details) = details {
        context = context.with_details(details);
    }
    Error::validation_with_context(message, context)
}

pub(crate) fn validate_classify(content: &Content, options: &ClassifyOptions) -> Result<()> {
    if content.is_empty() {
        return Err(invalid("content must contain at least one item", "content", None));
    }

    if let Some(labels) = options.effective_labels() {
        if !(MIN_LABELS..=MAX_LABELS).contains(&labels.len()) {
            return Err(invalid(
                "label count out of range",
                "options.labels",
                Some(format!(
                    "got {}, expected {}..={}",
                    labels.len(),
                    MIN_LABELS,
                    MAX_LABELS
                )),
            ));
        }
        if let Some(idx) = labels.iter().position(|l| l.trim().is_empty()) {
            return Err(invalid(
                "labels must not be blank",
                &format!("options.labels[{}]", idx),
                None,
            ));
        }
    }

    if let Some(description) = options.effective_description() {
        let chars = description.chars().count();
        if chars > MAX_DESCRIPTION_CHARS {
            return Err(invalid(
                "description too long",
                "options.description",
                Some(format!("got {} chars, max {}", chars, MAX_DESCRIPTION_CHARS)),
            ));
        }
    }

    if options.effective_labels().is_none()
        && options.effective_description().is_none()
        && options.effective_project_id().is_none()
    {
        return Err(invalid(
            "one of labels, description or project_id is required",
            "options",
            None,
        ));
    }

    Ok(())
}

pub(crate) fn validate_feedback(detection_id: &str, ground_truth: &GroundTruth) -> Result<()> {
    if detection_id.trim().is_empty() {
        return Err(invalid("detection_id must not be empty", "detection_id", None));
    }
    if ground_truth.is_empty() {
        return Err(invalid(
            "ground_truth must contain at least one label",
            "ground_truth",
            None,
        ));
    }
    Ok(())
}

pub(crate) fn validate_project_id(project_id: &str) -> Result<()> {
    if project_id.trim().is_empty() {
        return Err(invalid("project_id must not be empty", "project_id", None));
    }
    Ok(())
}
