//! Property-based tests for portable_errors
//!
//! These tests use proptest to generate random codes and operation sequences
//! and verify the value-type invariants hold.

use portable_errors::{
    Category, ErrorCategory, ErrorCode, ErrorCondition, Errc, ForeignCategory, ForeignErrorCode,
    generic_category, interop_category, system_category,
    system::{posix_category, win32, win32_category},
};
use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

// ============================================================================
// FIXTURES
// ============================================================================

struct PlainCategory {
    name: &'static str,
    id: u64,
}

impl Category for PlainCategory {
    fn name(&self) -> &'static str {
        self.name
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn message(&self, value: i32) -> String {
        format!("{} #{}", self.name, value)
    }
}

static TWIN_A: PlainCategory = PlainCategory { name: "twin", id: 0 };
static TWIN_B: PlainCategory = PlainCategory { name: "twin", id: 0 };
static NUMBERED: PlainCategory = PlainCategory { name: "numbered", id: 0xC0FF_EE00 };

struct LibCategory {
    name: &'static str,
}

impl ForeignCategory for LibCategory {
    fn name(&self) -> &'static str {
        self.name
    }

    fn message(&self, value: i32) -> String {
        format!("{} reports {}", self.name, value)
    }
}

static LIB_A: LibCategory = LibCategory { name: "liba" };
static LIB_B: LibCategory = LibCategory { name: "libb" };

fn native_categories() -> Vec<ErrorCategory> {
    vec![
        generic_category(),
        system_category(),
        posix_category(),
        win32_category(),
        ErrorCategory::new(&TWIN_A),
        ErrorCategory::new(&TWIN_B),
        ErrorCategory::new(&NUMBERED),
    ]
}

fn external_categories() -> [&'static dyn ForeignCategory; 2] {
    [&LIB_A, &LIB_B]
}

fn category() -> impl Strategy<Value = ErrorCategory> {
    (0..native_categories().len()).prop_map(|index| native_categories()[index])
}

fn code() -> impl Strategy<Value = ErrorCode> {
    prop_oneof![
        Just(ErrorCode::empty()),
        (any::<i32>(), category()).prop_map(|(value, cat)| ErrorCode::new(value, cat)),
        (-4i32..4, category()).prop_map(|(value, cat)| ErrorCode::new(value, cat)),
        (any::<i32>(), category())
            .prop_map(|(value, cat)| ErrorCode::from_foreign(ForeignErrorCode::from_native(value, cat))),
        (any::<i32>(), 0..2usize).prop_map(|(value, index)| {
            ErrorCode::from_foreign(ForeignErrorCode::new(value, external_categories()[index]))
        }),
    ]
}

fn std_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// ============================================================================
// IDENTITY AND EQUALITY
// ============================================================================

proptest! {
    /// Same parts, same code
    #[test]
    fn construction_is_deterministic(value in any::<i32>(), cat in category()) {
        prop_assert_eq!(ErrorCode::new(value, cat), ErrorCode::new(value, cat));
    }

    /// Distinct categories never compare equal, even with equal values
    #[test]
    fn distinct_categories_distinct_codes(
        value in any::<i32>(),
        a in 0usize..7,
        b in 0usize..7,
    ) {
        let cats = native_categories();
        let (ca, cb) = (cats[a], cats[b]);
        prop_assume!(ca != cb);
        prop_assert_ne!(ErrorCode::new(value, ca), ErrorCode::new(value, cb));
    }

    /// Equality is exactly equality of observables
    #[test]
    fn equality_matches_observables(a in code(), b in code()) {
        let observed = a.value() == b.value() && a.category() == b.category();
        prop_assert_eq!(a == b, observed);
    }
}

// ============================================================================
// ORDERING PROPERTIES
// ============================================================================

proptest! {
    /// Exactly one of a<b, b<a, a==b
    #[test]
    fn ordering_is_trichotomous(a in code(), b in code()) {
        let relations = [a < b, b < a, a == b];
        prop_assert_eq!(relations.iter().filter(|held| **held).count(), 1);
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    /// Ordering is transitive
    #[test]
    fn ordering_is_transitive(a in code(), b in code(), c in code()) {
        let mut sorted = [a, b, c];
        sorted.sort();
        prop_assert!(sorted[0] <= sorted[1]);
        prop_assert!(sorted[1] <= sorted[2]);
        prop_assert!(sorted[0] <= sorted[2]);
        if a < b && b < c {
            prop_assert!(a < c);
        }
    }

    /// Ordering is category first, then value
    #[test]
    fn ordering_is_category_then_value(a in code(), b in code()) {
        let expected = a.category().cmp(&b.category()).then(a.value().cmp(&b.value()));
        prop_assert_eq!(a.cmp(&b), expected);
    }
}

// ============================================================================
// HASH PROPERTIES
// ============================================================================

proptest! {
    /// Equal codes hash equal, both through hash_value and std Hash
    #[test]
    fn equal_codes_hash_equal(a in code(), b in code()) {
        if a == b {
            prop_assert_eq!(a.hash_value(), b.hash_value());
            prop_assert_eq!(std_hash(&a), std_hash(&b));
        }
    }

    /// Empty and its Native twin hash alike
    #[test]
    fn rebuilt_code_hashes_equal(c in code()) {
        let rebuilt = ErrorCode::new(c.value(), c.category());
        prop_assert_eq!(c.hash_value(), rebuilt.hash_value());
    }

    /// Conditions follow the same rule
    #[test]
    fn equal_conditions_hash_equal(value in any::<i32>(), cat in category()) {
        let a = ErrorCondition::new(value, cat);
        let b = ErrorCondition::new(value, cat);
        prop_assert_eq!(a.hash_value(), b.hash_value());
    }
}

// ============================================================================
// FOREIGN BRIDGE PROPERTIES
// ============================================================================

proptest! {
    /// Native codes survive a trip through the foreign representation
    #[test]
    fn native_round_trip_is_lossless(value in any::<i32>(), cat in category()) {
        let code = ErrorCode::new(value, cat);
        let back = ErrorCode::from_foreign(code.to_foreign());
        prop_assert_eq!(back.value(), value);
        prop_assert_eq!(back.category(), cat);
        prop_assert_eq!(back.failed(), code.failed());
        prop_assert_eq!(back, code);
    }

    /// Foreign payloads are returned verbatim
    #[test]
    fn foreign_payload_is_verbatim(value in any::<i32>(), index in 0..2usize) {
        let payload = ForeignErrorCode::new(value, external_categories()[index]);
        let code = ErrorCode::from_foreign(payload);
        prop_assert_eq!(code.to_foreign(), payload);
        prop_assert_eq!(code.category(), interop_category());
        prop_assert_eq!(code.failed(), value != 0);
        prop_assert_eq!(code.message(), payload.message());
    }

    /// Materializing never changes what the code reports
    #[test]
    fn materialize_is_transparent(c in code()) {
        let mut materialized = c;
        let payload = *materialized.materialize_as_foreign();
        prop_assert!(materialized.is_foreign());
        prop_assert_eq!(materialized, c);
        prop_assert_eq!(materialized.failed(), c.failed());
        prop_assert_eq!(materialized.hash_value(), c.hash_value());
        prop_assert_eq!(payload, c.to_foreign());
    }
}

// ============================================================================
// STATE TRANSITION PROPERTIES
// ============================================================================

#[derive(Debug, Clone)]
enum Op {
    Assign(i32, usize),
    Clear,
    Materialize,
    AdoptNative(i32, usize),
    AdoptExternal(i32, usize),
    FromKind(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<i32>(), 0usize..7).prop_map(|(v, c)| Op::Assign(v, c)),
        Just(Op::Clear),
        Just(Op::Materialize),
        (any::<i32>(), 0usize..7).prop_map(|(v, c)| Op::AdoptNative(v, c)),
        (any::<i32>(), 0usize..2).prop_map(|(v, c)| Op::AdoptExternal(v, c)),
        (0..Errc::ALL.len()).prop_map(Op::FromKind),
    ]
}

proptest! {
    /// Random sequences keep the code consistent with a simple model
    #[test]
    fn state_transitions_match_model(ops in prop::collection::vec(op(), 0..64)) {
        let cats = native_categories();
        let externals = external_categories();
        let mut code = ErrorCode::default();
        // (value, category, failed) as the model predicts them.
        let mut expected = (0, system_category(), false);

        for op in ops {
            match op {
                Op::Assign(v, c) => {
                    code.assign(v, cats[c]);
                    expected = (v, cats[c], cats[c].failed(v));
                }
                Op::Clear => {
                    code.clear();
                    expected = (0, system_category(), false);
                }
                Op::Materialize => {
                    code.materialize_as_foreign();
                    prop_assert!(code.is_foreign());
                }
                Op::AdoptNative(v, c) => {
                    code = ErrorCode::from_foreign(ForeignErrorCode::from_native(v, cats[c]));
                    expected = (v, cats[c], cats[c].failed(v));
                }
                Op::AdoptExternal(v, c) => {
                    let payload = ForeignErrorCode::new(v, externals[c]);
                    code = payload.into();
                    expected = (code.value(), interop_category(), v != 0);
                    prop_assert_eq!(code.to_foreign(), payload);
                }
                Op::FromKind(k) => {
                    let kind = Errc::ALL[k];
                    code = kind.into();
                    expected = (kind.value(), generic_category(), kind.value() != 0);
                }
            }

            prop_assert_eq!(code.value(), expected.0);
            prop_assert_eq!(code.category(), expected.1);
            prop_assert_eq!(code.failed(), expected.2);
            prop_assert_eq!(bool::from(code), expected.2);
            prop_assert_eq!(ErrorCode::from_foreign(code.to_foreign()), code);
        }
    }
}

// ============================================================================
// EMPTY STATE
// ============================================================================

#[test]
fn default_code_is_empty_success() {
    let code = ErrorCode::default();
    assert!(!code.failed());
    assert_eq!(code.value(), 0);
    assert_eq!(code.category(), system_category());
    assert!(code == Errc::Success);
}

// ============================================================================
// MESSAGE PROPERTIES
// ============================================================================

proptest! {
    /// Bounded rendering stays in bounds and is terminated
    #[test]
    fn bounded_message_never_overflows(c in code(), len in 1usize..96) {
        let mut buffer = vec![0xA5u8; len + 8];
        let written = c.message_to(&mut buffer[..len]).len();
        prop_assert!(written < len);
        prop_assert_eq!(buffer[written], 0);
        prop_assert!(buffer[len..].iter().all(|byte| *byte == 0xA5));
    }

    /// Bounded rendering is a prefix of the owned message
    #[test]
    fn bounded_message_is_prefix(c in code(), len in 1usize..96) {
        let mut buffer = vec![0u8; len];
        let full = c.message();
        let bounded = c.message_to(&mut buffer);
        prop_assert!(full.starts_with(bounded));
    }

    /// Messages are never empty and never carry OS line endings
    #[test]
    fn messages_are_normalized(value in any::<i32>()) {
        for cat in native_categories() {
            let text = cat.message(value);
            prop_assert!(!text.is_empty());
            prop_assert!(!text.ends_with('\n'));
            prop_assert!(!text.ends_with('\r'));
        }
    }

    /// Display never panics and is "<category>:<value>" for native codes
    #[test]
    fn display_format(value in any::<i32>(), cat in category()) {
        let code = ErrorCode::new(value, cat);
        prop_assert_eq!(code.to_string(), format!("{}:{}", cat.name(), value));
    }
}

// ============================================================================
// CLASSIFICATION PROPERTIES
// ============================================================================

proptest! {
    /// HRESULT_FROM_WIN32 packing never changes the classification
    #[test]
    fn hresult_packing_is_transparent(native in 1i32..0xFFFF) {
        let packed = (native as u32 | 0x8007_0000) as i32;
        prop_assert_eq!(win32::classify(packed), win32::classify(native));
    }

    /// Default conditions agree with code/condition equivalence
    #[test]
    fn code_matches_its_own_condition(c in code()) {
        let condition = c.default_error_condition();
        prop_assert!(c == condition);
        prop_assert!(condition == c);
    }

    /// Errc values round-trip through their number
    #[test]
    fn errc_from_raw_round_trip(index in 0..Errc::ALL.len()) {
        let kind = Errc::ALL[index];
        prop_assert_eq!(Errc::from_raw(kind.value()), Some(kind));
        prop_assert_eq!(Errc::try_from(kind.value()).ok(), Some(kind));
    }
}

// ============================================================================
// CONCURRENCY PROPERTIES
// ============================================================================

proptest! {
    /// Codes and categories can be read from many threads at once
    #[test]
    fn concurrent_reads_agree(values in prop::collection::vec(any::<i32>(), 1..16)) {
        let codes: Vec<ErrorCode> = values
            .iter()
            .map(|&value| ErrorCode::new(value, system_category()))
            .collect();
        let expected: Vec<String> = codes.iter().map(ErrorCode::message).collect();

        let results: Vec<Vec<String>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| codes.iter().map(ErrorCode::message).collect::<Vec<_>>()))
                .collect();
            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });

        for result in results {
            prop_assert_eq!(&result, &expected);
        }
    }
}

#[test]
fn category_ordering_is_total_over_fixtures() {
    let cats = native_categories();
    for a in &cats {
        for b in &cats {
            let holds = [a < b, b < a, a == b].iter().filter(|held| **held).count();
            assert_eq!(holds, 1, "{:?} vs {:?}", a, b);
            if a == b {
                assert_eq!(a.cmp(b), Ordering::Equal);
            }
        }
    }
}
