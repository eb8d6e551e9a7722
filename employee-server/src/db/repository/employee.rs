//! Employee Repository

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::{RepoError, RepoResult, Repository};
use crate::db::models::{Employee, EmployeeCreate, EmployeeId, EmployeeUpdate};

/// In-memory employee store
///
/// Owns a `BTreeMap` keyed by id behind an `RwLock`, so concurrent creates
/// cannot collide on identifiers and concurrent updates cannot be lost.
/// Clones share the same underlying map.
#[derive(Clone, Default)]
pub struct EmployeeRepository {
    store: Arc<RwLock<BTreeMap<EmployeeId, Employee>>>,
}

impl EmployeeRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

impl Repository<Employee, EmployeeCreate, EmployeeUpdate> for EmployeeRepository {
    /// All employees in ascending id order; empty vec for an empty store
    fn find_all(&self) -> Vec<Employee> {
        self.store.read().values().cloned().collect()
    }

    /// Find employee by id
    fn find_by_id(&self, id: EmployeeId) -> Option<Employee> {
        self.store.read().get(&id).cloned()
    }

    /// Create a new employee
    ///
    /// The id is re-derived from the current map on every create: one
    /// greater than the highest id present, or 1 when the map is empty.
    /// Deleting the highest-id employee therefore frees its id for the
    /// next create.
    fn create(&self, data: EmployeeCreate) -> Employee {
        let mut store = self.store.write();
        let id = store.keys().next_back().copied().unwrap_or(0) + 1;
        let employee = Employee {
            id,
            first_name: data.first_name.unwrap_or_default(),
            last_name: data.last_name.unwrap_or_default(),
            social_security_number: data.social_security_number,
            address1: data.address1,
            address2: data.address2,
            city: data.city,
            state: data.state,
            zip_code: data.zip_code,
            phone_number: data.phone_number,
            email: data.email,
        };
        store.insert(id, employee.clone());
        employee
    }

    /// Merge the contact/address fields onto the stored employee
    ///
    /// `id`, `first_name`, `last_name` and `social_security_number` are not
    /// touched through this path. An unknown id is an `InvalidArgument`
    /// error, not a not-found result; callers pre-check existence.
    fn update(&self, id: EmployeeId, data: EmployeeUpdate) -> RepoResult<Employee> {
        let mut store = self.store.write();
        let employee = store
            .get_mut(&id)
            .ok_or_else(|| RepoError::InvalidArgument(format!("no employee with id {id}")))?;

        employee.address1 = data.address1;
        employee.address2 = data.address2;
        employee.city = data.city;
        employee.state = data.state;
        employee.zip_code = data.zip_code;
        employee.phone_number = data.phone_number;
        employee.email = data.email;

        Ok(employee.clone())
    }

    /// Remove an employee; no-op (returns false) when the id is unknown
    fn delete(&self, id: EmployeeId) -> bool {
        self.store.write().remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_payload(first: &str, last: &str) -> EmployeeCreate {
        EmployeeCreate {
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            social_security_number: None,
            address1: None,
            address2: None,
            city: None,
            state: None,
            zip_code: None,
            phone_number: None,
            email: None,
        }
    }

    #[test]
    fn test_create_assigns_sequential_ids() {
        let repo = EmployeeRepository::new();

        let a = repo.create(create_payload("Ada", "Lovelace"));
        let b = repo.create(create_payload("Alan", "Turing"));
        let c = repo.create(create_payload("Grace", "Hopper"));

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(c.id, 3);
    }

    #[test]
    fn test_id_is_max_plus_one_not_a_counter() {
        let repo = EmployeeRepository::new();
        repo.create(create_payload("Ada", "Lovelace"));
        let b = repo.create(create_payload("Alan", "Turing"));

        // Deleting the highest id frees it for the next create
        assert!(repo.delete(b.id));
        let c = repo.create(create_payload("Grace", "Hopper"));
        assert_eq!(c.id, 2);
    }

    #[test]
    fn test_deleting_a_gap_does_not_reuse_its_id() {
        let repo = EmployeeRepository::new();
        repo.create(create_payload("Ada", "Lovelace"));
        let b = repo.create(create_payload("Alan", "Turing"));
        repo.create(create_payload("Grace", "Hopper"));

        assert!(repo.delete(b.id));
        let d = repo.create(create_payload("Edsger", "Dijkstra"));
        assert_eq!(d.id, 4);
    }

    #[test]
    fn test_find_all_on_empty_store() {
        let repo = EmployeeRepository::new();
        assert!(repo.find_all().is_empty());
    }

    #[test]
    fn test_find_by_id_missing_returns_none() {
        let repo = EmployeeRepository::new();
        assert!(repo.find_by_id(9).is_none());
    }

    #[test]
    fn test_update_merges_contact_fields_only() {
        let repo = EmployeeRepository::new();
        let mut payload = create_payload("Ada", "Lovelace");
        payload.social_security_number = Some("123-45-6789".to_string());
        let created = repo.create(payload);

        let updated = repo
            .update(
                created.id,
                EmployeeUpdate {
                    address1: Some("12 Main St".to_string()),
                    address2: None,
                    city: Some("London".to_string()),
                    state: None,
                    zip_code: Some("E1 6AN".to_string()),
                    phone_number: None,
                    email: Some("ada@example.com".to_string()),
                },
            )
            .expect("update should succeed for an existing id");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.first_name, "Ada");
        assert_eq!(updated.last_name, "Lovelace");
        assert_eq!(
            updated.social_security_number.as_deref(),
            Some("123-45-6789")
        );
        assert_eq!(updated.address1.as_deref(), Some("12 Main St"));
        assert_eq!(updated.city.as_deref(), Some("London"));
        assert_eq!(updated.email.as_deref(), Some("ada@example.com"));

        // The merge is visible through a fresh lookup, not just the return value
        let stored = repo.find_by_id(created.id).unwrap();
        assert_eq!(stored.address1.as_deref(), Some("12 Main St"));
    }

    #[test]
    fn test_update_unknown_id_is_invalid_argument() {
        let repo = EmployeeRepository::new();
        repo.create(create_payload("Ada", "Lovelace"));

        let result = repo.update(
            9,
            EmployeeUpdate {
                address1: Some("nowhere".to_string()),
                address2: None,
                city: None,
                state: None,
                zip_code: None,
                phone_number: None,
                email: None,
            },
        );

        assert!(matches!(result, Err(RepoError::InvalidArgument(_))));
        // Store is unchanged
        assert_eq!(repo.find_all().len(), 1);
        assert!(repo.find_by_id(1).unwrap().address1.is_none());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let repo = EmployeeRepository::new();
        assert!(!repo.delete(1));
    }
}
