// Complete Membership Record System
// Demonstrates encapsulated records, constructor defaults, namespaced
// constants, and fallible operations

use colored::Colorize;
use std::error::Error;
use std::io;

// ============================================================================
// Milestone 1: Record with a Read-Only Identity
// ============================================================================

/// Errors surfaced by record operations
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("note text must not be empty")]
    EmptyNote,

    #[error("note weight must not be negative (got {0})")]
    NegativeWeight(i32),

    #[error("sync failed")]
    Io(#[from] io::Error),
}

/// Membership record with a fixed identity
///
/// `name` is set at construction time and there is deliberately no setter
/// for it; the address and the active flag stay mutable.
#[derive(Debug, Clone)]
pub struct Member {
    name: String,
    address: String,
    active: bool,
}

impl Member {
    /// Record kind tag shared by every instance
    pub const KIND: &'static str = "member";

    /// Address stored when a record is created without one
    pub const DEFAULT_ADDRESS: &'static str = "";

    /// Creates a record from a name alone; the other fields take defaults
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_details(name, Self::DEFAULT_ADDRESS, false)
    }

    /// Creates a record with a name and address; the flag defaults to false
    pub fn with_address(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self::with_details(name, address, false)
    }

    /// Creates a record with every field spelled out
    pub fn with_details(
        name: impl Into<String>,
        address: impl Into<String>,
        active: bool,
    ) -> Self {
        Member {
            name: name.into(),
            address: address.into(),
            active,
        }
    }

    /// Schema identifier for exported records
    pub fn schema() -> String {
        format!("{}/v1", Self::KIND)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

// ============================================================================
// Milestone 2: Defaulted Operation Options
// ============================================================================

/// Optional knobs for [`Member::add_note`]
///
/// The `Default` impl stands in for default arguments: start from
/// `NoteOptions::default()` and override only what differs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoteOptions {
    /// Relative importance, 0 = unranked
    pub weight: i32,
    /// Keep the note at the top of the record
    pub pinned: bool,
}

impl Member {
    /// Attaches a free-form note to the record
    ///
    /// Notes are not stored in this demo; the call only validates its input.
    pub fn add_note(&self, text: &str, options: NoteOptions) -> Result<(), RegistryError> {
        if text.trim().is_empty() {
            return Err(RegistryError::EmptyNote);
        }
        if options.weight < 0 {
            return Err(RegistryError::NegativeWeight(options.weight));
        }
        Ok(())
    }

    /// Pushes local changes to the directory service
    ///
    /// No directory service is configured here, so the call always fails
    /// with a `NotConnected` I/O error.
    pub fn sync(&self) -> Result<(), RegistryError> {
        Err(io::Error::new(io::ErrorKind::NotConnected, "directory service unreachable").into())
    }
}

// ============================================================================
// Milestone 3: Module-Level Constants and Functions
// ============================================================================

/// Namespaced items that belong to no particular type
///
/// Free constants and functions in a module are the Rust rendition of
/// static utility members.
pub mod audit {
    /// Version stamp written into every audit line
    pub const FORMAT_VERSION: i32 = 123;

    /// Header line for a fresh audit log
    pub fn banner() -> String {
        format!("audit log v{FORMAT_VERSION}")
    }
}

// ============================================================================
// Milestone 4: Optional Fields
// ============================================================================

/// Contact entry whose name may be absent
#[derive(Debug, Clone)]
pub struct Contact {
    name: Option<String>,
    address: String,
}

impl Contact {
    pub fn new(name: Option<String>, address: impl Into<String>) -> Self {
        Contact {
            name,
            address: address.into(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    #[allow(dead_code)]
    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }
}

// ============================================================================
// Example Usage and Main
// ============================================================================

fn main() {
    println!("{}\n", "=== Membership Record System ===".bold());

    // Example 1: read-only identity, mutable fields
    println!("Example 1: Record with a read-only identity");
    let mut member = Member::with_details("John Doe", "Somewhere", false);
    println!(
        "name: {} address: {} active: {}",
        member.name(),
        member.address(),
        member.is_active()
    );

    // name is fixed at construction; there is no set_name
    member.set_address("Nowhere");
    member.set_active(true);
    println!(
        "after update: address: {} active: {}\n",
        member.address(),
        member.is_active()
    );

    // Example 2: constructor variants fill in the omitted fields
    println!("Example 2: Constructor defaults");
    let d1 = Member::new("Lorem ipsum");
    let d2 = Member::with_address("Lorem ipsum", "Somewhere");
    let d3 = Member::with_details("Lorem ipsum", "Somewhere", true);
    println!("d1: {:?}", d1);
    println!("d2: {:?}", d2);
    println!("d3: {:?}\n", d3);

    // Example 3: options struct with Default instead of default arguments
    println!("Example 3: Defaulted operation options");
    d1.add_note("foo", NoteOptions::default()).unwrap();
    d1.add_note(
        "foo",
        NoteOptions {
            weight: 1,
            ..Default::default()
        },
    )
    .unwrap();
    d1.add_note(
        "foo",
        NoteOptions {
            weight: 1,
            pinned: true,
        },
    )
    .unwrap();
    println!("{}\n", "three notes accepted".green());

    // Example 4: module-level namespace
    println!("Example 4: Module-level constants and functions");
    let version = audit::FORMAT_VERSION;
    println!("format version: {version}");
    println!("{}\n", audit::banner());

    // Example 5: associated items on the type
    println!("Example 5: Associated constants and functions");
    println!(
        "kind: {} default address: {:?}",
        Member::KIND,
        Member::DEFAULT_ADDRESS
    );
    println!("schema: {}", Member::schema());
    println!("schema (again): {}\n", Member::schema());

    // Example 6: the failing call is contained by its handler
    println!("Example 6: Scoped error handling");
    if let Err(err) = member.sync() {
        eprintln!("{}", err.to_string().red());
        let mut cause = err.source();
        while let Some(inner) = cause {
            eprintln!("  caused by: {inner}");
            cause = inner.source();
        }
    }
    println!("{}\n", "still running after the failed sync".green());

    // Example 7: optional name on a contact entry
    println!("Example 7: Optional fields");
    let known = Contact::new(Some("Jane Doe".to_string()), "Anywhere");
    let unknown = Contact::new(None, "Somewhere");
    println!("{} @ {}", known.name().unwrap_or("(unnamed)"), known.address());
    println!(
        "{} @ {}",
        unknown.name().unwrap_or("(unnamed)"),
        unknown.address()
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_only_constructor_uses_defaults() {
        let member = Member::new("Lorem ipsum");

        assert_eq!(member.name(), "Lorem ipsum");
        assert_eq!(member.address(), "");
        assert!(!member.is_active());
    }

    #[test]
    fn two_argument_constructor_defaults_the_flag() {
        let member = Member::with_address("Lorem ipsum", "Somewhere");

        assert_eq!(member.address(), "Somewhere");
        assert!(!member.is_active());
    }

    #[test]
    fn full_constructor_stores_every_field() {
        let member = Member::with_details("John Doe", "Somewhere", false);

        assert_eq!(member.name(), "John Doe");
        assert_eq!(member.address(), "Somewhere");
        assert!(!member.is_active());
    }

    #[test]
    fn setters_round_trip() {
        let mut member = Member::with_details("John Doe", "Somewhere", false);

        member.set_address("Nowhere");
        member.set_active(true);

        assert_eq!(member.address(), "Nowhere");
        assert!(member.is_active());
    }

    #[test]
    fn name_survives_mutation() {
        let mut member = Member::with_details("John Doe", "Somewhere", false);

        member.set_address("Nowhere");
        member.set_active(true);

        assert_eq!(member.name(), "John Doe");
    }

    #[test]
    fn note_options_default_to_unranked_and_unpinned() {
        let options = NoteOptions::default();

        assert_eq!(options.weight, 0);
        assert!(!options.pinned);
    }

    #[test]
    fn add_note_accepts_every_option_shape() {
        let member = Member::new("Lorem ipsum");

        assert!(member.add_note("foo", NoteOptions::default()).is_ok());
        assert!(member
            .add_note(
                "foo",
                NoteOptions {
                    weight: 1,
                    ..Default::default()
                }
            )
            .is_ok());
        assert!(member
            .add_note(
                "foo",
                NoteOptions {
                    weight: 1,
                    pinned: true,
                }
            )
            .is_ok());
    }

    #[test]
    fn add_note_rejects_empty_text() {
        let member = Member::new("Lorem ipsum");

        assert!(matches!(
            member.add_note("", NoteOptions::default()),
            Err(RegistryError::EmptyNote)
        ));
    }

    #[test]
    fn add_note_rejects_negative_weight() {
        let member = Member::new("Lorem ipsum");
        let options = NoteOptions {
            weight: -1,
            ..Default::default()
        };

        assert!(matches!(
            member.add_note("foo", options),
            Err(RegistryError::NegativeWeight(-1))
        ));
    }

    #[test]
    fn sync_fails_with_not_connected() {
        let member = Member::new("Lorem ipsum");

        match member.sync().unwrap_err() {
            RegistryError::Io(io_err) => assert_eq!(io_err.kind(), io::ErrorKind::NotConnected),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn sync_error_reports_its_cause() {
        let member = Member::new("Lorem ipsum");
        let err = member.sync().unwrap_err();

        let cause = err.source().expect("sync error should carry a cause");
        assert!(cause.to_string().contains("unreachable"));
    }

    #[test]
    fn schema_is_derived_from_the_kind_tag() {
        assert_eq!(Member::schema(), "member/v1");
        assert!(Member::schema().starts_with(Member::KIND));
    }

    #[test]
    fn audit_banner_embeds_the_format_version() {
        assert_eq!(audit::FORMAT_VERSION, 123);
        assert_eq!(audit::banner(), "audit log v123");
    }

    #[test]
    fn contact_name_may_be_absent() {
        let contact = Contact::new(None, "Somewhere");

        assert_eq!(contact.name(), None);
        assert_eq!(contact.address(), "Somewhere");
    }

    #[test]
    fn contact_address_round_trips() {
        let mut contact = Contact::new(Some("Jane Doe".to_string()), "Anywhere");

        contact.set_address("Elsewhere");

        assert_eq!(contact.address(), "Elsewhere");
        assert_eq!(contact.name(), Some("Jane Doe"));
    }
}
