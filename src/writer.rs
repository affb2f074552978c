// src/writer.rs
//! Filtering and serialising partial JSON responses.
use crate::config::PartialJsonOptions;
use crate::error::PartialResponseError;
use crate::request::PartialRequest;
use partial_response_filter::TreeFilter;
use partial_response_selector::FieldSet;
use serde::Serialize;
use serde_json::Value;
use std::io::Write;

/// Applies `fields` to `value`, or clones it unchanged when there is no set.
pub fn filter_value(value: &Value, fields: Option<&FieldSet>, ignore_case: bool) -> Value {
    match fields {
        Some(fields) => TreeFilter::new(&fields.matcher(ignore_case)).apply(value),
        None => value.clone(),
    }
}

/// Writes `value` to `writer`, pruned to `fields` when a set is given.
pub fn filter_and_write<W: Write>(
    writer: W,
    value: &Value,
    fields: Option<&FieldSet>,
    ignore_case: bool,
    pretty: bool,
) -> Result<(), PartialResponseError> {
    match fields {
        Some(_) => write_json(writer, &filter_value(value, fields, ignore_case), pretty),
        None => write_json(writer, value, pretty),
    }
}

fn write_json<W: Write>(
    writer: W,
    value: &Value,
    pretty: bool,
) -> Result<(), PartialResponseError> {
    if pretty {
        serde_json::to_writer_pretty(writer, value)?;
    } else {
        serde_json::to_writer(writer, value)?;
    }
    Ok(())
}

/// Writes response bodies according to [`PartialJsonOptions`].
#[derive(Debug, Clone, Default)]
pub struct PartialJsonWriter {
    options: PartialJsonOptions,
}

impl PartialJsonWriter {
    pub fn new(options: PartialJsonOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PartialJsonOptions {
        &self.options
    }

    /// Serialises `data`, filtered by the request's selector.
    ///
    /// A malformed selector is reported before anything is written.
    pub fn write<W: Write, T: Serialize + ?Sized>(
        &self,
        writer: W,
        data: &T,
        request: &PartialRequest,
    ) -> Result<(), PartialResponseError> {
        let fields = request.fields()?;
        let value = serde_json::to_value(data)?;
        log::info!(
            "Executing partial JSON result (selector: {:?})",
            request.selector().filter(|_| fields.is_some())
        );
        filter_and_write(
            writer,
            &value,
            fields.as_ref(),
            self.options.ignore_case,
            self.options.pretty,
        )
    }

    pub fn to_vec<T: Serialize + ?Sized>(
        &self,
        data: &T,
        request: &PartialRequest,
    ) -> Result<Vec<u8>, PartialResponseError> {
        let mut buffer = Vec::new();
        self.write(&mut buffer, data, request)?;
        Ok(buffer)
    }
}
