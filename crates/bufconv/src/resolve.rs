//! Turning a (descriptor, item size, target) request into a converter.

use crate::descriptor::{Descriptor, DEFAULT_DESCRIPTOR};
use crate::error::{Error, Result};
use crate::kind::TargetKind;
use crate::table::{lookup, lookup_codes, Converter};

/// Resolve a converter from a buffer descriptor to the native kind named by
/// `target_code`.
///
/// Every call parses from scratch; nothing is cached. Fails with
/// [`Error::UnsupportedConversion`] when the descriptor names no supported
/// source type or `target_code` is not one of `zbcsijfd`. The error quotes
/// `descriptor` exactly as given.
pub fn resolve(descriptor: Option<&str>, item_size: usize, target_code: char) -> Result<Converter> {
    let parsed = parse(descriptor, item_size)?;
    match lookup_codes(parsed.source.code(), parsed.reverse, target_code) {
        Some(converter) => Ok(resolved(descriptor, item_size, converter)),
        None => {
            let original = descriptor.unwrap_or(DEFAULT_DESCRIPTOR);
            tracing::debug!(
                descriptor = original,
                target = %target_code,
                "unknown target kind"
            );
            Err(Error::unsupported(original))
        }
    }
}

/// Like [`resolve`], with the target already classified.
pub fn resolve_kind(
    descriptor: Option<&str>,
    item_size: usize,
    target: TargetKind,
) -> Result<Converter> {
    let parsed = parse(descriptor, item_size)?;
    let converter = lookup(parsed.source, parsed.reverse, target);
    Ok(resolved(descriptor, item_size, converter))
}

fn parse(descriptor: Option<&str>, item_size: usize) -> Result<Descriptor> {
    Descriptor::parse(descriptor, item_size).inspect_err(|e| {
        tracing::debug!(
            descriptor = e.descriptor(),
            item_size,
            "unsupported buffer type"
        );
    })
}

fn resolved(descriptor: Option<&str>, item_size: usize, converter: Converter) -> Converter {
    tracing::trace!(
        descriptor = descriptor.unwrap_or(DEFAULT_DESCRIPTOR),
        item_size,
        source = ?converter.source(),
        target = ?converter.target(),
        reversed = converter.reversed(),
        "resolved buffer converter"
    );
    converter
}
