/*!
 * Core Types
 * Common types used across the simulator
 */

use smartstring::alias::String as SmartString;

/// Address type for partition offsets
pub type Address = usize;

/// Size type for partition lengths (same unit as total memory, e.g. KB)
pub type Size = usize;

/// Process label attached to an allocation request
///
/// Labels are short ("A", "B", ...) so they stay inline without allocating.
pub type Label = SmartString;
