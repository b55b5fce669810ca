use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::models::{BankClient, LedgerError, DATE_FORMAT};

/// Columns of the snapshot file, in the order they are written
const SNAPSHOT_HEADER: [&str; 5] = ["Id", "Name", "salary", "balance", "creationDate"];

/// In-memory client store mirrored to a CSV snapshot after every mutation.
///
/// The snapshot is write-only: it is fully rewritten on each mutating call and
/// never read back, so a process restart starts from an empty ledger. The
/// mutex serializes mutating operations, which also keeps each snapshot
/// internally consistent.
pub struct Ledger {
    clients: Mutex<Vec<BankClient>>,
    csv_path: PathBuf,
}

impl Ledger {
    pub fn new<P: AsRef<Path>>(csv_path: P) -> Self {
        Ledger {
            clients: Mutex::new(Vec::new()),
            csv_path: csv_path.as_ref().to_path_buf(),
        }
    }

    /// Create a new client with an opening balance equal to `salary`.
    /// Rejects an empty name and the exact name+salary pair of a live client.
    pub fn create_account(&self, name: &str, salary: f64) -> Result<BankClient, LedgerError> {
        if name.is_empty() {
            return Err(LedgerError::MissingNameOrSalary);
        }

        let mut clients = self.clients.lock().unwrap();
        if clients
            .iter()
            .any(|c| c.name == name && c.salary == salary)
        {
            return Err(LedgerError::DuplicateClient);
        }

        let client = BankClient::new(name, salary);
        clients.push(client.clone());
        self.write_snapshot(&clients)?;
        Ok(client)
    }

    /// Remove a client entirely; there is no soft delete
    pub fn delete_account(&self, id: Uuid) -> Result<(), LedgerError> {
        let mut clients = self.clients.lock().unwrap();
        let pos = clients
            .iter()
            .position(|c| c.id == id)
            .ok_or(LedgerError::AccountNotFound)?;
        clients.remove(pos);
        self.write_snapshot(&clients)?;
        Ok(())
    }

    /// Credit `amount` to the client's balance, returning the new balance.
    /// The amount is not sign-checked: a negative deposit decreases the balance.
    pub fn deposit(&self, id: Uuid, amount: f64) -> Result<f64, LedgerError> {
        let mut clients = self.clients.lock().unwrap();
        let pos = clients
            .iter()
            .position(|c| c.id == id)
            .ok_or(LedgerError::AccountNotFound)?;
        clients[pos].balance += amount;
        let balance = clients[pos].balance;
        self.write_snapshot(&clients)?;
        Ok(balance)
    }

    /// Debit `amount` from the client's balance, returning the new balance.
    /// A withdrawal may not drive the balance below zero.
    pub fn withdraw(&self, id: Uuid, amount: f64) -> Result<f64, LedgerError> {
        let mut clients = self.clients.lock().unwrap();
        let pos = clients
            .iter()
            .position(|c| c.id == id)
            .ok_or(LedgerError::AccountNotFound)?;
        if clients[pos].balance < amount {
            return Err(LedgerError::InsufficientBalance("withdrawal"));
        }
        clients[pos].balance -= amount;
        let balance = clients[pos].balance;
        self.write_snapshot(&clients)?;
        Ok(balance)
    }

    /// Move `amount` from sender to receiver, returning both display names.
    /// A transfer to oneself is accepted and nets to a no-op.
    pub fn transfer(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
        amount: f64,
    ) -> Result<(String, String), LedgerError> {
        let mut clients = self.clients.lock().unwrap();
        let sender_pos = clients.iter().position(|c| c.id == sender_id);
        let receiver_pos = clients.iter().position(|c| c.id == receiver_id);
        let (sender_pos, receiver_pos) = match (sender_pos, receiver_pos) {
            (Some(sender_pos), Some(receiver_pos)) => (sender_pos, receiver_pos),
            _ => return Err(LedgerError::TransferPartyNotFound),
        };

        if clients[sender_pos].balance < amount {
            return Err(LedgerError::InsufficientBalance("transfer"));
        }
        clients[sender_pos].balance -= amount;
        clients[receiver_pos].balance += amount;

        let names = (
            clients[sender_pos].name.clone(),
            clients[receiver_pos].name.clone(),
        );
        self.write_snapshot(&clients)?;
        Ok(names)
    }

    pub fn get_by_id(&self, id: Uuid) -> Result<BankClient, LedgerError> {
        let clients = self.clients.lock().unwrap();
        clients
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(LedgerError::ClientNotFound)
    }

    /// All clients whose salary strictly exceeds `threshold`
    pub fn clients_with_salary_above(&self, threshold: f64) -> Vec<BankClient> {
        let clients = self.clients.lock().unwrap();
        clients.iter().filter(|c| c.salary > threshold).cloned().collect()
    }

    /// All clients whose balance strictly exceeds `threshold`
    pub fn clients_with_balance_above(&self, threshold: f64) -> Vec<BankClient> {
        let clients = self.clients.lock().unwrap();
        clients.iter().filter(|c| c.balance > threshold).cloned().collect()
    }

    /// All clients created strictly after `timestamp` (`YYYY-MM-DD HH:MM:SS`)
    pub fn clients_created_after(&self, timestamp: &str) -> Result<Vec<BankClient>, LedgerError> {
        let after = NaiveDateTime::parse_from_str(timestamp, DATE_FORMAT)
            .map_err(|_| LedgerError::InvalidCreationDate)?;

        let clients = self.clients.lock().unwrap();
        Ok(clients
            .iter()
            .filter(|c| {
                NaiveDateTime::parse_from_str(&c.creation_date, DATE_FORMAT)
                    .map(|created| created > after)
                    .unwrap_or(false)
            })
            .cloned()
            .collect())
    }

    /// The client with the maximum salary. An empty ledger is an error, not a
    /// null result.
    pub fn highest_salary_client(&self) -> Result<BankClient, LedgerError> {
        let clients = self.clients.lock().unwrap();
        clients
            .iter()
            .max_by(|a, b| a.salary.total_cmp(&b.salary))
            .cloned()
            .ok_or(LedgerError::NoClients)
    }

    /// Rewrite the whole snapshot file from the current collection
    fn write_snapshot(&self, clients: &[BankClient]) -> Result<(), LedgerError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.csv_path)?;

        writer.write_record(SNAPSHOT_HEADER)?;
        for client in clients {
            writer.serialize(client)?;
        }
        writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_ledger() -> (Ledger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let ledger = Ledger::new(temp_dir.path().join("clients.csv"));
        (ledger, temp_dir)
    }

    fn snapshot_lines(ledger: &Ledger) -> Vec<String> {
        let content = std::fs::read_to_string(&ledger.csv_path).unwrap();
        content.lines().map(str::to_string).collect()
    }

    #[test]
    fn create_sets_opening_balance_and_unique_ids() {
        let (ledger, _dir) = test_ledger();
        let alice = ledger.create_account("Alice", 100.0).unwrap();
        let bob = ledger.create_account("Bob", 80.0).unwrap();

        assert_eq!(alice.balance, 100.0);
        assert_eq!(alice.salary, 100.0);
        assert_ne!(alice.id, bob.id);
    }

    #[test]
    fn create_rejects_exact_name_and_salary_pair() {
        let (ledger, _dir) = test_ledger();
        ledger.create_account("Alice", 100.0).unwrap();

        let err = ledger.create_account("Alice", 100.0).unwrap_err();
        assert!(matches!(err, LedgerError::DuplicateClient));

        // Same name with a different salary is a different client
        ledger.create_account("Alice", 120.0).unwrap();
        ledger.create_account("Bob", 100.0).unwrap();
    }

    #[test]
    fn create_rejects_empty_name() {
        let (ledger, _dir) = test_ledger();
        let err = ledger.create_account("", 100.0).unwrap_err();
        assert!(matches!(err, LedgerError::MissingNameOrSalary));
    }

    #[test]
    fn deposits_accumulate() {
        let (ledger, _dir) = test_ledger();
        let alice = ledger.create_account("Alice", 100.0).unwrap();

        ledger.deposit(alice.id, 25.0).unwrap();
        ledger.deposit(alice.id, 10.5).unwrap();
        let balance = ledger.deposit(alice.id, 4.5).unwrap();

        assert_eq!(balance, 140.0);
        assert_eq!(ledger.get_by_id(alice.id).unwrap().balance, 140.0);
    }

    #[test]
    fn negative_deposit_decreases_balance() {
        let (ledger, _dir) = test_ledger();
        let alice = ledger.create_account("Alice", 100.0).unwrap();

        let balance = ledger.deposit(alice.id, -30.0).unwrap();
        assert_eq!(balance, 70.0);
    }

    #[test]
    fn deposit_to_unknown_id_fails() {
        let (ledger, _dir) = test_ledger();
        let err = ledger.deposit(Uuid::new_v4(), 10.0).unwrap_err();
        assert!(matches!(err, LedgerError::AccountNotFound));
    }

    #[test]
    fn withdraw_rejects_overdraft_without_mutating() {
        let (ledger, _dir) = test_ledger();
        let alice = ledger.create_account("Alice", 50.0).unwrap();

        let err = ledger.withdraw(alice.id, 50.01).unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientBalance("withdrawal")));
        assert_eq!(ledger.get_by_id(alice.id).unwrap().balance, 50.0);

        // Withdrawing the exact balance is allowed
        let balance = ledger.withdraw(alice.id, 50.0).unwrap();
        assert_eq!(balance, 0.0);
    }

    #[test]
    fn transfer_moves_funds_and_conserves_total() {
        let (ledger, _dir) = test_ledger();
        let alice = ledger.create_account("Alice", 100.0).unwrap();
        let bob = ledger.create_account("Bob", 40.0).unwrap();

        let (from, to) = ledger.transfer(alice.id, bob.id, 30.0).unwrap();
        assert_eq!(from, "Alice");
        assert_eq!(to, "Bob");

        let alice = ledger.get_by_id(alice.id).unwrap();
        let bob = ledger.get_by_id(bob.id).unwrap();
        assert_eq!(alice.balance, 70.0);
        assert_eq!(bob.balance, 70.0);
        assert_eq!(alice.balance + bob.balance, 140.0);
    }

    #[test]
    fn transfer_rejects_underfunded_sender() {
        let (ledger, _dir) = test_ledger();
        let alice = ledger.create_account("Alice", 20.0).unwrap();
        let bob = ledger.create_account("Bob", 40.0).unwrap();

        let err = ledger.transfer(alice.id, bob.id, 30.0).unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientBalance("transfer")));
        assert_eq!(ledger.get_by_id(alice.id).unwrap().balance, 20.0);
        assert_eq!(ledger.get_by_id(bob.id).unwrap().balance, 40.0);
    }

    #[test]
    fn transfer_with_unknown_party_fails() {
        let (ledger, _dir) = test_ledger();
        let alice = ledger.create_account("Alice", 100.0).unwrap();

        let err = ledger.transfer(alice.id, Uuid::new_v4(), 10.0).unwrap_err();
        assert!(matches!(err, LedgerError::TransferPartyNotFound));
        let err = ledger.transfer(Uuid::new_v4(), alice.id, 10.0).unwrap_err();
        assert!(matches!(err, LedgerError::TransferPartyNotFound));
    }

    #[test]
    fn transfer_to_self_is_a_net_noop() {
        let (ledger, _dir) = test_ledger();
        let alice = ledger.create_account("Alice", 100.0).unwrap();

        ledger.transfer(alice.id, alice.id, 60.0).unwrap();
        assert_eq!(ledger.get_by_id(alice.id).unwrap().balance, 100.0);
    }

    #[test]
    fn delete_removes_client_everywhere() {
        let (ledger, _dir) = test_ledger();
        let alice = ledger.create_account("Alice", 100.0).unwrap();
        ledger.create_account("Bob", 80.0).unwrap();

        ledger.delete_account(alice.id).unwrap();

        assert!(matches!(
            ledger.get_by_id(alice.id).unwrap_err(),
            LedgerError::ClientNotFound
        ));
        assert!(ledger
            .clients_with_salary_above(50.0)
            .iter()
            .all(|c| c.id != alice.id));
        assert!(matches!(
            ledger.delete_account(alice.id).unwrap_err(),
            LedgerError::AccountNotFound
        ));
    }

    #[test]
    fn listings_are_strictly_above_threshold() {
        let (ledger, _dir) = test_ledger();
        ledger.create_account("Low", 50.0).unwrap();
        let high = ledger.create_account("High", 50.5).unwrap();

        let by_salary = ledger.clients_with_salary_above(50.0);
        assert_eq!(by_salary.len(), 1);
        assert_eq!(by_salary[0].id, high.id);

        // Balance moves independently of salary
        ledger.withdraw(high.id, 10.0).unwrap();
        assert!(ledger.clients_with_balance_above(50.0).is_empty());
        assert_eq!(ledger.clients_with_salary_above(50.0).len(), 1);
    }

    #[test]
    fn listings_on_empty_ledger_are_empty_not_errors() {
        let (ledger, _dir) = test_ledger();
        assert!(ledger.clients_with_salary_above(50.0).is_empty());
        assert!(ledger.clients_with_balance_above(50.0).is_empty());
    }

    #[test]
    fn created_after_filters_strictly() {
        let (ledger, _dir) = test_ledger();
        ledger.create_account("Alice", 100.0).unwrap();

        let all = ledger.clients_created_after("2000-01-01 00:00:00").unwrap();
        assert_eq!(all.len(), 1);
        let none = ledger.clients_created_after("3000-01-01 00:00:00").unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn created_after_rejects_unparsable_timestamp() {
        let (ledger, _dir) = test_ledger();
        let err = ledger.clients_created_after("01/01/2024").unwrap_err();
        assert!(matches!(err, LedgerError::InvalidCreationDate));
    }

    #[test]
    fn highest_salary_requires_a_nonempty_ledger() {
        let (ledger, _dir) = test_ledger();
        assert!(matches!(
            ledger.highest_salary_client().unwrap_err(),
            LedgerError::NoClients
        ));

        let alice = ledger.create_account("Alice", 100.0).unwrap();
        assert_eq!(ledger.highest_salary_client().unwrap().id, alice.id);

        let carol = ledger.create_account("Carol", 250.0).unwrap();
        assert_eq!(ledger.highest_salary_client().unwrap().id, carol.id);
    }

    #[test]
    fn snapshot_mirrors_live_collection_after_every_mutation() {
        let (ledger, _dir) = test_ledger();
        let alice = ledger.create_account("Alice", 100.0).unwrap();
        ledger.create_account("Bob", 80.0).unwrap();

        let lines = snapshot_lines(&ledger);
        assert_eq!(lines[0], "Id,Name,salary,balance,creationDate");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with(&alice.id.to_string()));

        ledger.delete_account(alice.id).unwrap();
        let lines = snapshot_lines(&ledger);
        assert_eq!(lines.len(), 2);

        ledger.delete_account(ledger.highest_salary_client().unwrap().id).unwrap();
        let lines = snapshot_lines(&ledger);
        assert_eq!(lines, vec!["Id,Name,salary,balance,creationDate"]);
    }
}
