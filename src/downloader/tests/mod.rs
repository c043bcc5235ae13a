use super::test_helpers::*;
use super::*;
use crate::config::DownloadOptions;
use crate::error::{Error, MetadataError};
use crate::types::{DownloadOutcome, FailureKind, SkipReason, StickerId};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod metadata;

/// Collect the sticker outcomes from a list of events, ordered by sticker ID
fn sticker_outcomes(events: &[Event]) -> Vec<(StickerId, DownloadOutcome)> {
    let mut outcomes: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            Event::StickerFinished {
                sticker_id,
                outcome,
                ..
            } => Some((*sticker_id, *outcome)),
            _ => None,
        })
        .collect();
    outcomes.sort_by_key(|(id, _)| *id);
    outcomes
}
