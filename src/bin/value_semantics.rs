// Complete Value Semantics Demo
// Derived equality and hashing, exhaustive enum dispatch, computed properties

use colored::Colorize;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

// ============================================================================
// Milestone 1: Derived Structural Equality
// ============================================================================

/// Plain value record: two profiles with the same fields are the same profile
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Profile {
    pub name: String,
    pub address: String,
}

impl Profile {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Profile {
            name: name.into(),
            address: address.into(),
        }
    }
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// ============================================================================
// Milestone 2: Closed Variant Set with Exhaustive Dispatch
// ============================================================================

/// Deployment target for a mobile build
///
/// Adding a variant without updating every `match` over this enum is a
/// compile error, so dispatch can never silently skip a case.
#[derive(Debug, Clone)]
pub enum Platform {
    Android { os: String, package_name: String },
    Ios { os: String, bundle_id: String },
    WindowsPhone { os: String, package_id: String },
}

/// One descriptive line per platform; no catch-all arm on purpose
pub fn describe(platform: &Platform) -> String {
    match platform {
        Platform::Android { os, package_name } => format!("{os} / {package_name}"),
        Platform::Ios { os, bundle_id } => format!("{os} / {bundle_id}"),
        Platform::WindowsPhone { os, package_id } => format!("{os} / {package_id}"),
    }
}

// ============================================================================
// Milestone 3: Computed Properties and Bounded Setters
// ============================================================================

/// Resident entry with a derived adulthood flag and a bounded address field
#[derive(Debug, Clone)]
pub struct Resident {
    age: u32,
    name: String,
    address: String,
}

impl Resident {
    /// Characters of the address kept by the setter
    const ADDRESS_LIMIT: usize = 10;

    pub fn new(age: u32, name: impl Into<String>) -> Self {
        Resident {
            age,
            name: name.into(),
            address: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Computed on read, so no stored flag can drift out of date
    pub fn is_adult(&self) -> bool {
        self.age >= 19
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Keeps only the first `ADDRESS_LIMIT` characters
    pub fn set_address(&mut self, value: &str) {
        self.address = value.chars().take(Self::ADDRESS_LIMIT).collect();
    }
}

// ============================================================================
// Example Usage and Main
// ============================================================================

fn main() {
    println!("{}\n", "=== Value Semantics ===".bold());

    // Example 1: equality, hashing, and debug output come from derives
    println!("Example 1: Structural equality");
    let john = Profile::new("John Doe", "Somewhere");
    let john_doe = Profile::new("John Doe", "Somewhere");
    let jane = Profile::new("Jane Doe", "Anywhere");

    println!("john == john_doe? {}", john == john_doe);
    println!("john == jane? {}", john == jane);
    println!("hash(john) = {:#018x}", hash_of(&john));
    println!("john = {:?}", john);
    println!("jane = {:?}\n", jane);

    // Example 2: every variant must be handled somewhere
    println!("Example 2: Exhaustive dispatch");
    let builds = [
        Platform::Android {
            os: "Android 10".to_string(),
            package_name: "com.example.android".to_string(),
        },
        Platform::Ios {
            os: "iOS 13".to_string(),
            bundle_id: "com.example.ios".to_string(),
        },
        Platform::WindowsPhone {
            os: "Windows 10".to_string(),
            package_id: "com.example.windows".to_string(),
        },
    ];
    for build in &builds {
        println!("{}", describe(build));
    }
    println!();

    // Example 3: computed property plus a setter that bounds its input
    println!("Example 3: Computed properties");
    let mut resident = Resident::new(20, "dlwlrma");
    resident.set_address("Gangnam-gu, Seoul, Republic of Korea");
    println!(
        "{}, {}, {}",
        resident.name(),
        if resident.is_adult() { "adult" } else { "minor" },
        resident.address()
    );
}

// ============================================================================
// Tests
// ============================================================================
