// src/pipeline/paginate.rs

//! Greedy message packing under the Telegram length cap.

use super::assemble::DigestEntry;

/// Hard per-message length cap, in characters.
pub const MAX_MESSAGE_LEN: usize = 4086;

/// Split a digest into messages, never breaking an entry.
///
/// The first message starts with the header. An entry is appended only if
/// the combined character count stays strictly under `max_len`; otherwise
/// the accumulator is flushed and the entry starts the next message. The
/// final accumulator is always flushed, so at least one message is
/// produced even with no entries. Entries are assumed to individually fit
/// under the cap; an oversized one is emitted whole rather than truncated.
pub fn paginate(header: &str, entries: &[DigestEntry], max_len: usize) -> Vec<String> {
    let mut messages = Vec::new();
    let mut acc = header.to_string();
    let mut acc_len = acc.chars().count();

    for entry in entries {
        let entry_len = entry.text.chars().count();
        if acc_len + entry_len < max_len {
            acc.push_str(&entry.text);
            acc_len += entry_len;
        } else {
            messages.push(acc);
            acc = entry.text.clone();
            acc_len = entry_len;
        }
    }

    messages.push(acc);
    messages
}
