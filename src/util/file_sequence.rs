//! Input-file queueing and numbered file-sequence expansion.
//!
//! A positional argument ending in [`crate::config::CONTINUATION_MARKER`]
//! (`DVD001.VOB+`) stands for the whole run `DVD001.VOB`, `DVD002.VOB`, ...
//! for as long as the files exist. The counter is the last group of digits
//! in the name and keeps its width: expansion stops rather than growing
//! `999` into `1000`.

use std::fs::File;

use crate::error::ParamsError;

/// Append one path to the input queue.
///
/// The queue grows through `try_reserve`, so an allocation failure is
/// reported instead of aborting the process.
pub fn queue_file(queue: &mut Vec<String>, name: &str) -> Result<(), ParamsError> {
    queue.try_reserve(1).map_err(|e| {
        ParamsError::ResourceExhausted(format!("cannot queue input file {name}: {e}"))
    })?;
    queue.push(name.to_owned());
    Ok(())
}

/// Expand `base` (marker already stripped) into the files that exist on disk.
///
/// Returns the number of files queued. A name without digits is queued as a
/// single file without probing. Otherwise candidates are probed with
/// `File::open` and only files that opened are queued; the first missing
/// file ends the run and is not an error.
pub fn expand_file_sequence(queue: &mut Vec<String>, base: &str) -> Result<usize, ParamsError> {
    let Some((start, end)) = counter_window(base) else {
        queue_file(queue, base)?;
        return Ok(1);
    };

    let mut name = base.as_bytes().to_vec();
    let mut queued = 0usize;
    loop {
        // The window only ever holds ASCII digits, so `name` stays UTF-8.
        let candidate = String::from_utf8_lossy(&name).into_owned();
        if File::open(&candidate).is_err() {
            break;
        }
        queue_file(queue, &candidate)?;
        queued += 1;

        if !increment_digits(&mut name[start..end]) {
            break;
        }
    }
    Ok(queued)
}

/// Byte range of the last run of ASCII digits in `name`.
fn counter_window(name: &str) -> Option<(usize, usize)> {
    let bytes = name.as_bytes();
    let end = bytes.iter().rposition(u8::is_ascii_digit)? + 1;
    let start = bytes[..end]
        .iter()
        .rposition(|b| !b.is_ascii_digit())
        .map_or(0, |p| p + 1);
    Some((start, end))
}

/// Add one to a zero-padded decimal counter in place.
///
/// Returns `false` when the increment would need an extra digit; the
/// counter is left untouched in that case.
fn increment_digits(digits: &mut [u8]) -> bool {
    if digits.iter().all(|&d| d == b'9') {
        return false;
    }
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            break;
        }
    }
    true
}
