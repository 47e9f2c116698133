//! The default policy table.
//!
//! One [`PrefixIndex`] per role, consulted only after the Admin
//! short-circuit: Admin carries an implicit universal all-true rule that
//! matches every key before the table is looked at. That is policy, not an
//! optimization. Overrides are a separate layer and can still reduce Admin
//! access (see the engine crate).

use schoolgate_models::{Permission, Role};
use std::collections::HashMap;

use crate::prefix::PrefixIndex;

/// The static, build-time default policy: `(role, key) -> Permission`.
#[derive(Debug, Clone)]
pub struct PolicyTable {
    rules: HashMap<Role, PrefixIndex>,
}

impl PolicyTable {
    pub fn builder() -> PolicyTableBuilder {
        PolicyTableBuilder::default()
    }

    /// Resolve the default permission for a role on a key.
    ///
    /// Pure and total: unknown keys and roles without rules resolve to
    /// [`Permission::NONE`].
    pub fn resolve(&self, role: Role, key: &str) -> Permission {
        // Admin's universal rule applies before any table rule.
        if role == Role::Admin {
            return Permission::FULL;
        }
        self.rules
            .get(&role)
            .map(|index| index.lookup(key))
            .unwrap_or(Permission::NONE)
    }
}

/// Builder for a [`PolicyTable`], used by the built-in matrix and by tests.
#[derive(Debug, Default)]
pub struct PolicyTableBuilder {
    rules: HashMap<Role, PrefixIndex>,
}

impl PolicyTableBuilder {
    /// Add a `(prefix, Permission)` rule for a role. A duplicate prefix for
    /// the same role replaces the earlier rule.
    pub fn allow(mut self, role: Role, prefix: &str, permission: Permission) -> Self {
        self.rules.entry(role).or_default().insert(prefix, permission);
        self
    }

    pub fn build(self) -> PolicyTable {
        PolicyTable { rules: self.rules }
    }
}

impl Default for PolicyTable {
    /// The built-in policy matrix for the school application.
    ///
    /// Admin is intentionally absent: its universal rule lives in
    /// [`PolicyTable::resolve`].
    fn default() -> Self {
        use schoolgate_core::keys;

        let view = Permission::VIEW;
        let full = Permission::FULL;

        PolicyTable::builder()
            // Principal: read access across the whole school, plus ownership
            // of announcements.
            .allow(Role::Principal, "", view)
            .allow(Role::Principal, keys::PENGUMUMAN, full)
            // Teacher: works inside the learning area; may view and edit
            // grades but not create or delete grade records.
            .allow(Role::Teacher, keys::SISWA, view)
            .allow(Role::Teacher, keys::JADWAL, view)
            .allow(Role::Teacher, keys::PENGUMUMAN, view)
            .allow(Role::Teacher, keys::PEMBELAJARAN, view)
            .allow(
                Role::Teacher,
                keys::PEMBELAJARAN_NILAI_SISWA,
                Permission::new(true, false, true, false),
            )
            .allow(
                Role::Teacher,
                keys::PEMBELAJARAN_ABSENSI,
                Permission::new(true, true, true, false),
            )
            .allow(
                Role::Teacher,
                keys::PEMBELAJARAN_MATERI,
                Permission::new(true, true, true, true),
            )
            .allow(
                Role::Teacher,
                keys::HAFALAN,
                Permission::new(true, true, true, false),
            )
            // Student: view-only on their learning data and own billing.
            .allow(Role::Student, keys::JADWAL, view)
            .allow(Role::Student, keys::PENGUMUMAN, view)
            .allow(Role::Student, keys::PEMBELAJARAN, view)
            .allow(Role::Student, keys::HAFALAN, view)
            .allow(Role::Student, keys::KEUANGAN_TAGIHAN, view)
            // Parent: view of the child's progress, may initiate payments.
            .allow(Role::Parent, keys::JADWAL, view)
            .allow(Role::Parent, keys::PENGUMUMAN, view)
            .allow(Role::Parent, keys::PEMBELAJARAN_NILAI_SISWA, view)
            .allow(Role::Parent, keys::PEMBELAJARAN_ABSENSI, view)
            .allow(Role::Parent, keys::HAFALAN, view)
            .allow(Role::Parent, keys::KEUANGAN, view)
            .allow(
                Role::Parent,
                keys::KEUANGAN_PEMBAYARAN,
                Permission::new(true, true, false, false),
            )
            // Finance officer: owns the finance area.
            .allow(Role::FinanceOfficer, keys::KEUANGAN, full)
            .allow(Role::FinanceOfficer, keys::SISWA, view)
            .allow(Role::FinanceOfficer, keys::PENGUMUMAN, view)
            // Staff: maintains master data and schedules.
            .allow(
                Role::Staff,
                keys::SISWA,
                Permission::new(true, true, true, false),
            )
            .allow(Role::Staff, keys::GURU, view)
            .allow(Role::Staff, keys::PEGAWAI, view)
            .allow(
                Role::Staff,
                keys::JADWAL,
                Permission::new(true, true, true, false),
            )
            .allow(
                Role::Staff,
                keys::PENGUMUMAN,
                Permission::new(true, true, true, false),
            )
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schoolgate_core::keys;

    #[test]
    fn test_default_deny_for_unknown_key() {
        let table = PolicyTable::default();
        for role in Role::ALL {
            if role == Role::Admin || role == Role::Principal {
                continue; // Admin is universal, Principal has a universal view rule
            }
            assert_eq!(
                table.resolve(role, "modul.tak_dikenal"),
                Permission::NONE,
                "role {role} must default-deny an unknown key"
            );
        }
    }

    #[test]
    fn test_admin_universality() {
        let table = PolicyTable::default();
        assert_eq!(table.resolve(Role::Admin, keys::SISWA), Permission::FULL);
        assert_eq!(
            table.resolve(Role::Admin, "modul.tak_dikenal"),
            Permission::FULL
        );
        assert_eq!(table.resolve(Role::Admin, ""), Permission::FULL);
    }

    #[test]
    fn test_admin_short_circuit_ignores_table_rules() {
        // Even a table that tries to restrict Admin is not consulted.
        let table = PolicyTable::builder()
            .allow(Role::Admin, keys::SISWA, Permission::NONE)
            .build();
        assert_eq!(table.resolve(Role::Admin, keys::SISWA), Permission::FULL);
    }

    #[test]
    fn test_teacher_grade_scenario() {
        let table = PolicyTable::default();
        assert_eq!(
            table.resolve(Role::Teacher, keys::PEMBELAJARAN_NILAI_SISWA),
            Permission::new(true, false, true, false)
        );
    }

    #[test]
    fn test_student_grade_scenario() {
        let table = PolicyTable::default();
        // No exact rule for the student on grades; the parent prefix rule
        // applies.
        assert_eq!(
            table.resolve(Role::Student, keys::PEMBELAJARAN_NILAI_SISWA),
            Permission::VIEW
        );
    }

    #[test]
    fn test_most_specific_prefix_wins() {
        let table = PolicyTable::default();
        // Teacher has view on "pembelajaran" but full on the materi child.
        assert_eq!(
            table.resolve(Role::Teacher, keys::PEMBELAJARAN_MATERI),
            Permission::FULL
        );
        // An unlisted child falls back to the parent rule.
        assert_eq!(
            table.resolve(Role::Teacher, "pembelajaran.tugas"),
            Permission::VIEW
        );
    }

    #[test]
    fn test_principal_universal_view() {
        let table = PolicyTable::default();
        assert_eq!(
            table.resolve(Role::Principal, keys::KEUANGAN_TAGIHAN),
            Permission::VIEW
        );
        assert_eq!(
            table.resolve(Role::Principal, keys::PENGUMUMAN),
            Permission::FULL
        );
    }

    #[test]
    fn test_student_cannot_touch_finance_master() {
        let table = PolicyTable::default();
        assert_eq!(
            table.resolve(Role::Student, keys::KEUANGAN_PEMBAYARAN),
            Permission::NONE
        );
        // But their own billing view is allowed.
        assert_eq!(
            table.resolve(Role::Student, keys::KEUANGAN_TAGIHAN),
            Permission::VIEW
        );
    }
}
