//! Capability key constants for the Schoolgate application.
//!
//! This module provides centralized resource key constants for use across
//! the codebase. Using these constants instead of string literals ensures
//! consistency and makes refactoring easier. Keys are dot-delimited and
//! hierarchical: a rule on `pembelajaran` covers every `pembelajaran.*` key
//! unless a more specific rule exists.
//!
//! # Example
//!
//! ```ignore
//! use schoolgate_core::keys;
//!
//! let permission = engine.resolve(Some(&subject), keys::PEMBELAJARAN_NILAI_SISWA).await;
//! if permission.edit {
//!     // Save the grade
//! }
//! ```

// =============================================================================
// Students and staff
// =============================================================================

/// Student records (master data).
pub const SISWA: &str = "siswa";
/// Teacher records (master data).
pub const GURU: &str = "guru";
/// Non-teaching staff records.
pub const PEGAWAI: &str = "pegawai";

// =============================================================================
// Scheduling
// =============================================================================

/// Class and teaching schedules.
pub const JADWAL: &str = "jadwal";

// =============================================================================
// Learning
// =============================================================================

/// The learning area as a whole (parent of the keys below).
pub const PEMBELAJARAN: &str = "pembelajaran";
/// Student grade records.
pub const PEMBELAJARAN_NILAI_SISWA: &str = "pembelajaran.nilai_siswa";
/// Attendance records.
pub const PEMBELAJARAN_ABSENSI: &str = "pembelajaran.absensi";
/// Teaching materials.
pub const PEMBELAJARAN_MATERI: &str = "pembelajaran.materi";

// =============================================================================
// Memorization tracking
// =============================================================================

/// Memorization progress records.
pub const HAFALAN: &str = "hafalan";

// =============================================================================
// Finance
// =============================================================================

/// The finance area as a whole (parent of the keys below).
pub const KEUANGAN: &str = "keuangan";
/// Billing records.
pub const KEUANGAN_TAGIHAN: &str = "keuangan.tagihan";
/// Payment records.
pub const KEUANGAN_PEMBAYARAN: &str = "keuangan.pembayaran";

// =============================================================================
// Communication
// =============================================================================

/// School-wide announcements.
pub const PENGUMUMAN: &str = "pengumuman";

// =============================================================================
// Administration
// =============================================================================

/// Application settings, including permission overrides.
pub const PENGATURAN: &str = "pengaturan";
