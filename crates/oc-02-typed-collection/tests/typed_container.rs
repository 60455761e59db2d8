//! # Typed Container Tests (oc-02)
//!
//! Shape-bound containers over `Object` elements.
//!
//! ## Test Categories
//!
//! 1. **Binding** - declared and undeclared capabilities
//! 2. **Gating** - conforming and non-conforming elements
//! 3. **Identity** - membership of shared objects
//! 4. **Protocols** - cursor and indexed access through the gate

use oc_01_ordered_collection::{Countable, ExternalIterator, IndexedAccess, Key};
use oc_02_typed_collection::{Capability, Object, Requirement, TypedCollectionError, TypedContainer};

// =============================================================================
// TEST FIXTURES
// =============================================================================

#[derive(Debug)]
struct Circle {
    radius: f64,
}

#[derive(Debug)]
struct Square {
    side: f64,
}

#[derive(Debug)]
struct Label;

/// Admits circles and squares
struct Shapes;

impl Capability for Shapes {
    type Element = Object;

    fn requirement() -> Option<Requirement<Object>> {
        Some(Requirement::object("Shape", |o: &Object| {
            o.is::<Circle>() || o.is::<Square>()
        }))
    }
}

/// Admits circles only
struct Circles;

impl Capability for Circles {
    type Element = Object;

    fn requirement() -> Option<Requirement<Object>> {
        Some(Requirement::instance_of::<Circle>())
    }
}

/// Never declares a requirement
struct Unbound;

impl Capability for Unbound {
    type Element = Object;
}

fn area(o: &Object) -> f64 {
    if let Some(c) = o.downcast_ref::<Circle>() {
        std::f64::consts::PI * c.radius * c.radius
    } else if let Some(s) = o.downcast_ref::<Square>() {
        s.side * s.side
    } else {
        0.0
    }
}

// =============================================================================
// BINDING
// =============================================================================

#[test]
fn test_unbound_capability_fails_before_reading_entries() {
    let mut read = 0;
    let entries = std::iter::from_fn(|| {
        read += 1;
        Some((Key::Int(0), Object::new(Circle { radius: 1.0 })))
    });

    let result = TypedContainer::<Unbound>::from_entries(entries);

    match result {
        Err(TypedCollectionError::NoCapabilityDeclared { container }) => {
            assert!(container.ends_with("Unbound"));
        }
        other => panic!("Expected NoCapabilityDeclared, got {:?}", other),
    }
    assert_eq!(read, 0, "No entry may be processed");
}

#[test]
fn test_containers_of_one_capability_share_the_requirement() {
    let a = TypedContainer::<Shapes>::new().unwrap();
    let b = TypedContainer::<Shapes>::new().unwrap();
    assert_eq!(a.requirement().name(), "Shape");
    assert_eq!(a.requirement().name(), b.requirement().name());
}

// =============================================================================
// GATING
// =============================================================================

#[test]
fn test_conforming_shape_is_accepted() {
    let mut shapes = TypedContainer::<Shapes>::new().unwrap();

    shapes.push(Object::new(Circle { radius: 1.0 })).unwrap();
    shapes
        .put("square", Object::new(Square { side: 2.0 }))
        .unwrap();

    assert_eq!(shapes.count(), 2);
    let total: f64 = shapes.values().map(area).sum();
    assert!((total - (std::f64::consts::PI + 4.0)).abs() < 1e-9);
}

#[test]
fn test_non_conforming_value_is_rejected_and_count_unchanged() {
    let mut shapes = TypedContainer::<Shapes>::new().unwrap();
    shapes.push(Object::new(Circle { radius: 1.0 })).unwrap();

    let result = shapes.push(Object::new(Label));

    match result {
        Err(TypedCollectionError::InvalidElementType {
            actual, expected, ..
        }) => {
            assert!(actual.ends_with("Label"), "Actual was {}", actual);
            assert_eq!(expected, "Shape");
        }
        other => panic!("Expected InvalidElementType, got {:?}", other),
    }
    assert_eq!(shapes.count(), 1);
}

#[test]
fn test_instance_of_capability_rejects_other_shapes() {
    let mut circles = TypedContainer::<Circles>::new().unwrap();

    assert!(circles.push(Object::new(Circle { radius: 2.0 })).is_ok());
    assert!(circles.push(Object::new(Square { side: 2.0 })).is_err());
    assert_eq!(circles.count(), 1);
}

#[test]
fn test_construction_rejects_bad_initial_entry() {
    let result = TypedContainer::<Shapes>::from_entries([
        ("c", Object::new(Circle { radius: 1.0 })),
        ("l", Object::new(Label)),
    ]);

    assert!(matches!(
        result,
        Err(TypedCollectionError::InvalidElementType { .. })
    ));
}

#[test]
fn test_error_message_is_diagnosable() {
    let mut circles = TypedContainer::<Circles>::new().unwrap();
    let err = circles.push(Object::new(Label)).unwrap_err();
    let message = err.to_string();

    assert!(message.contains("Circles"), "Message was: {}", message);
    assert!(message.contains("Label"), "Message was: {}", message);
    assert!(message.contains("Circle'"), "Message was: {}", message);
}

// =============================================================================
// IDENTITY
// =============================================================================

#[test]
fn test_contains_value_matches_shared_object_only() {
    let circle = Object::new(Circle { radius: 1.0 });
    let shapes = TypedContainer::<Shapes>::from_values([circle.clone()]).unwrap();

    assert_eq!(shapes.contains_value(&circle), Ok(true));
    assert_eq!(
        shapes.contains_value(&Object::new(Circle { radius: 1.0 })),
        Ok(false),
        "A lookalike is a different object"
    );
    assert!(shapes.contains_value(&Object::new(Label)).is_err());
}

// =============================================================================
// PROTOCOLS
// =============================================================================

#[test]
fn test_cursor_walks_typed_entries() {
    let mut shapes = TypedContainer::<Shapes>::from_values([
        Object::new(Square { side: 1.0 }),
        Object::new(Square { side: 3.0 }),
    ])
    .unwrap();

    let mut sides = Vec::new();
    shapes.rewind();
    while shapes.has_current() {
        let side = shapes
            .current()
            .and_then(|o| o.downcast_ref::<Square>())
            .map(|s| s.side);
        sides.push(side);
        shapes.advance();
    }

    assert_eq!(sides, vec![Some(1.0), Some(3.0)]);
}

#[test]
fn test_indexed_access_through_gate() {
    let mut shapes = TypedContainer::<Shapes>::new().unwrap();

    shapes
        .set(Some(Key::from("c")), Object::new(Circle { radius: 1.0 }))
        .unwrap();
    let rejected = shapes.set(None, Object::new(Label));

    assert!(rejected.is_err());
    assert!(shapes.has(&Key::from("c")));
    assert!(!shapes.has(&Key::Int(0)));

    shapes.unset(&Key::from("c"));
    assert_eq!(Countable::count(&shapes), 0);
}

#[test]
fn test_usort_orders_by_area() {
    let mut shapes = TypedContainer::<Shapes>::from_values([
        Object::new(Square { side: 3.0 }),
        Object::new(Circle { radius: 0.5 }),
        Object::new(Square { side: 1.0 }),
    ])
    .unwrap();

    shapes
        .usort(|a, b| area(a).total_cmp(&area(b)))
        .unwrap();

    let areas: Vec<f64> = shapes.values().map(area).collect();
    assert!(areas.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(shapes.first().map(|(k, _)| k.clone()), Some(Key::Int(0)));
}
