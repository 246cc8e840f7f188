//! In-process backend used when no hosted backend is configured.
//!
//! DESIGN
//! ======
//! One `RwLock` guards accounts, sessions, profiles and workouts together so
//! every operation sees a consistent snapshot. Workouts are kept in insertion
//! order; listing applies a stable date-descending sort, so records sharing a
//! date keep the order they were created in. Nothing survives a restart.
//!
//! LIMITATIONS
//! ===========
//! Session tokens never expire. A token is dropped only by `sign_out`, so
//! sessions that are never logged out stay in memory until the process
//! exits.

use std::collections::HashMap;
use std::fmt::Write;

use client::net::types::{Profile, User, Workout, WorkoutInput};
use rand::Rng;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{BackendError, Caller, RecordStore, Session, SessionProvider};

pub const MIN_PASSWORD_LEN: usize = 6;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// SHA-256 of the password, salted with the normalized e-mail.
#[must_use]
pub fn hash_password(email: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(email.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

struct Account {
    user: User,
    password_hash: String,
}

#[derive(Default)]
struct Tables {
    /// Normalized e-mail -> account.
    accounts: HashMap<String, Account>,
    /// Session token -> user.
    sessions: HashMap<String, User>,
    profiles: HashMap<Uuid, Profile>,
    workouts: Vec<Workout>,
}

impl Tables {
    fn open_session(&mut self, user: User) -> Session {
        let token = generate_token();
        self.sessions.insert(token.clone(), user.clone());
        Session { token, user }
    }

    fn authorize(&self, caller: &Caller) -> Result<(), BackendError> {
        match self.sessions.get(&caller.token) {
            Some(user) if user.id == caller.user_id => Ok(()),
            _ => Err(BackendError::Unauthorized),
        }
    }

    fn find_mut(&mut self, caller: &Caller, id: Uuid) -> Result<&mut Workout, BackendError> {
        self.workouts
            .iter_mut()
            .find(|w| w.id == id && w.user_id == caller.user_id)
            .ok_or(BackendError::NotFound)
    }
}

#[derive(Default)]
pub struct MemoryBackend {
    tables: RwLock<Tables>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn check_input(input: &WorkoutInput) -> Result<(), BackendError> {
    input
        .validate()
        .map_err(|reason| BackendError::InvalidInput(reason.to_owned()))
}

#[async_trait::async_trait]
impl SessionProvider for MemoryBackend {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, BackendError> {
        let email = normalize_email(email);
        let mut tables = self.tables.write().await;
        let user = match tables.accounts.get(&email) {
            Some(account) if account.password_hash == hash_password(&email, password) => account.user.clone(),
            _ => return Err(BackendError::Unauthorized),
        };
        Ok(tables.open_session(user))
    }

    async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<Session, BackendError> {
        let email = normalize_email(email);
        if email.is_empty() || !email.contains('@') {
            return Err(BackendError::InvalidInput("a valid email is required".into()));
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(BackendError::InvalidInput(format!(
                "password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }

        let mut tables = self.tables.write().await;
        if tables.accounts.contains_key(&email) {
            return Err(BackendError::InvalidInput("user already registered".into()));
        }

        let user = User { id: Uuid::new_v4(), email: email.clone() };
        let password_hash = hash_password(&email, password);
        tables.accounts.insert(email, Account { user: user.clone(), password_hash });
        tables.profiles.insert(user.id, Profile { name: name.trim().to_owned() });
        Ok(tables.open_session(user))
    }

    async fn current_user(&self, token: &str) -> Result<User, BackendError> {
        self.tables
            .read()
            .await
            .sessions
            .get(token)
            .cloned()
            .ok_or(BackendError::Unauthorized)
    }

    async fn sign_out(&self, token: &str) -> Result<(), BackendError> {
        self.tables.write().await.sessions.remove(token);
        Ok(())
    }
}

#[async_trait::async_trait]
impl RecordStore for MemoryBackend {
    async fn profile(&self, caller: &Caller) -> Result<Option<Profile>, BackendError> {
        let tables = self.tables.read().await;
        tables.authorize(caller)?;
        Ok(tables.profiles.get(&caller.user_id).cloned())
    }

    async fn list_workouts(&self, caller: &Caller) -> Result<Vec<Workout>, BackendError> {
        let tables = self.tables.read().await;
        tables.authorize(caller)?;
        let mut rows: Vec<Workout> = tables
            .workouts
            .iter()
            .filter(|w| w.user_id == caller.user_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }

    async fn insert_workout(&self, caller: &Caller, input: &WorkoutInput) -> Result<Workout, BackendError> {
        check_input(input)?;
        let mut tables = self.tables.write().await;
        tables.authorize(caller)?;
        let workout = Workout {
            id: Uuid::new_v4(),
            exercise: input.exercise.trim().to_owned(),
            duration: input.duration,
            calories: input.calories,
            date: input.date,
            user_id: caller.user_id,
        };
        tables.workouts.push(workout.clone());
        Ok(workout)
    }

    async fn update_workout(&self, caller: &Caller, id: Uuid, input: &WorkoutInput) -> Result<Workout, BackendError> {
        check_input(input)?;
        let mut tables = self.tables.write().await;
        tables.authorize(caller)?;
        let workout = tables.find_mut(caller, id)?;
        workout.exercise = input.exercise.trim().to_owned();
        workout.duration = input.duration;
        workout.calories = input.calories;
        workout.date = input.date;
        Ok(workout.clone())
    }

    async fn delete_workout(&self, caller: &Caller, id: Uuid) -> Result<(), BackendError> {
        let mut tables = self.tables.write().await;
        tables.authorize(caller)?;
        let index = tables
            .workouts
            .iter()
            .position(|w| w.id == id && w.user_id == caller.user_id)
            .ok_or(BackendError::NotFound)?;
        tables.workouts.remove(index);
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
