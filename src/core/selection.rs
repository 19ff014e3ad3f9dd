//! Which vehicle, if any, is open in the detail view.
//!
//! The selection stores the vehicle's id, never a copy of the record. It is
//! resolved against the inventory when rendered, and it is not re-checked
//! against the active filters: an open vehicle stays open even after the
//! filters stop matching it.

use crate::core::vehicle::{VehicleId, VehicleRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    open: Option<VehicleId>,
}

impl Selection {
    /// Open `id` if it exists in `inventory`, replacing any open vehicle.
    ///
    /// Returns `false` (and leaves the selection untouched) for unknown ids.
    pub fn open(&mut self, inventory: &[VehicleRecord], id: &VehicleId) -> bool {
        if inventory.iter().any(|record| &record.id == id) {
            self.open = Some(id.clone());
            true
        } else {
            false
        }
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn id(&self) -> Option<&VehicleId> {
        self.open.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Borrow the open record from `inventory`.
    pub fn resolve<'a>(&self, inventory: &'a [VehicleRecord]) -> Option<&'a VehicleRecord> {
        let id = self.open.as_ref()?;
        inventory.iter().find(|record| &record.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_inventory;

    #[test]
    fn test_starts_closed() {
        let selection = Selection::default();
        assert!(!selection.is_open());
        assert!(selection.resolve(&sample_inventory()).is_none());
    }

    #[test]
    fn test_open_and_close() {
        let inventory = sample_inventory();
        let mut selection = Selection::default();

        assert!(selection.open(&inventory, &VehicleId::from(2_i64)));
        assert_eq!(selection.id(), Some(&VehicleId::from(2_i64)));
        assert_eq!(selection.resolve(&inventory).map(|r| r.display_title()), Some("Seat Ibiza"));

        selection.close();
        assert!(!selection.is_open());
        assert_eq!(inventory.len(), sample_inventory().len());
    }

    #[test]
    fn test_opening_another_replaces_current() {
        let inventory = sample_inventory();
        let mut selection = Selection::default();
        selection.open(&inventory, &VehicleId::from(1_i64));
        selection.open(&inventory, &VehicleId::from(3_i64));
        assert_eq!(selection.id(), Some(&VehicleId::from(3_i64)));
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let inventory = sample_inventory();
        let mut selection = Selection::default();
        selection.open(&inventory, &VehicleId::from(1_i64));
        assert!(!selection.open(&inventory, &VehicleId::from(99_i64)));
        assert_eq!(selection.id(), Some(&VehicleId::from(1_i64)));
    }

    #[test]
    fn test_resolves_to_inventory_record_not_copy() {
        let inventory = sample_inventory();
        let mut selection = Selection::default();
        selection.open(&inventory, &VehicleId::from(4_i64));
        let resolved = selection.resolve(&inventory).unwrap();
        assert!(std::ptr::eq(resolved, &inventory[3]));
    }
}
