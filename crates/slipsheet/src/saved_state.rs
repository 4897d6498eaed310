//! Flat saved-state record for host persistence boundaries
//!
//! Hosts that survive process death or reconfiguration (rotation,
//! restore) persist the drawer's scalar state as a fixed-order record
//! appended after their own opaque blob. The engine neither knows nor
//! cares what the host blob contains; it only frames its own trailer.
//!
//! Field order is fixed: state, edge, invisible-offset, offset,
//! min-closing, min-opening, sticky-drag. `repr(C)` pins the layout and
//! `bytemuck` provides the byte view.

use bytemuck::{Pod, Zeroable};
use log::debug;

use crate::drawer::{DrawerConfig, DrawerSheet, DrawerState};
use crate::edge::Edge;

/// Identifies a drawer record trailing a host blob. Restore refuses
/// anything that does not end in this tag.
const RECORD_TAG: [u8; 4] = *b"DRWR";

/// Tag plus the packed record.
const TRAILER_LEN: usize = RECORD_TAG.len() + std::mem::size_of::<StateRecord>();

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
struct StateRecord {
    state: u32,
    edge: u32,
    invisible_offset: u32,
    offset: f32,
    min_closing_size: f32,
    min_opening_size: f32,
    sticky_drag: u32,
}

fn encode_state(state: DrawerState) -> u32 {
    match state {
        DrawerState::Closed => 0,
        DrawerState::Open => 1,
    }
}

fn decode_state(raw: u32) -> Option<DrawerState> {
    match raw {
        0 => Some(DrawerState::Closed),
        1 => Some(DrawerState::Open),
        _ => None,
    }
}

fn encode_edge(edge: Edge) -> u32 {
    match edge {
        Edge::Top => 0,
        Edge::Bottom => 1,
        Edge::Left => 2,
        Edge::Right => 3,
    }
}

fn decode_edge(raw: u32) -> Option<Edge> {
    match raw {
        0 => Some(Edge::Top),
        1 => Some(Edge::Bottom),
        2 => Some(Edge::Left),
        3 => Some(Edge::Right),
        _ => None,
    }
}

impl DrawerSheet {
    /// Serialize the drawer's scalar state, appended after the host's
    /// own opaque blob. The full extent is never persisted; it is
    /// re-derived from bounds after restore.
    pub fn save_state(&self, host_blob: &[u8]) -> Vec<u8> {
        let record = StateRecord {
            state: encode_state(self.state()),
            edge: encode_edge(self.edge()),
            invisible_offset: self.invisible_offset() as u32,
            offset: self.offset(),
            min_closing_size: self.min_closing_size(),
            min_opening_size: self.min_opening_size(),
            sticky_drag: self.sticky_drag() as u32,
        };

        let mut out = Vec::with_capacity(host_blob.len() + TRAILER_LEN);
        out.extend_from_slice(host_blob);
        out.extend_from_slice(&RECORD_TAG);
        out.extend_from_slice(bytemuck::bytes_of(&record));
        out
    }

    /// Restore scalar state previously written by
    /// [`DrawerSheet::save_state`] and return the host-blob prefix.
    ///
    /// An incompatible trailer (too short, wrong tag, out-of-range
    /// discriminants) reads no fields and hands the entire input back so
    /// the host can fall through to its generic restore path.
    pub fn restore_state<'a>(&mut self, saved: &'a [u8]) -> &'a [u8] {
        let Some(trailer_start) = saved.len().checked_sub(TRAILER_LEN) else {
            return saved;
        };
        let (host_blob, trailer) = saved.split_at(trailer_start);
        let (tag, record_bytes) = trailer.split_at(RECORD_TAG.len());
        if tag != RECORD_TAG {
            return saved;
        }

        let record: StateRecord = bytemuck::pod_read_unaligned(record_bytes);
        let (Some(state), Some(edge)) = (decode_state(record.state), decode_edge(record.edge))
        else {
            return saved;
        };

        self.apply_restored(
            state,
            edge,
            DrawerConfig {
                offset: record.offset,
                invisible_offset: record.invisible_offset != 0,
                min_opening_size: record.min_opening_size,
                min_closing_size: record.min_closing_size,
                sticky_drag: record.sticky_drag != 0,
            },
        );
        debug!("restored drawer state {state:?} on {edge:?}");
        host_blob
    }
}
