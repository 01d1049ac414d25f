//! Placement validation.
//!
//! A placement is accepted only when every field is present and in
//! range. Nothing is clamped: a candidate one cell outside the room is
//! rejected, not pulled back in. Every failing field is reported, in
//! form order.

use vacuum_core::{
    Direction, FieldError, FieldInput, FormField, PlacedPose, PlacementError, PlacementRequest,
};
use vacuum_space::Room;

/// Validate a form request against `room`.
///
/// # Examples
///
/// ```
/// use vacuum_core::{Direction, FormField, PlacedPose, PlacementRequest};
/// use vacuum_engine::validate_placement;
/// use vacuum_space::Room;
///
/// let room = Room::new(5, 5).unwrap();
///
/// let ok = validate_placement(&PlacementRequest::new("1", "2", "East"), &room);
/// assert_eq!(ok, Ok(PlacedPose::new(1, 2, Direction::East)));
///
/// let err = validate_placement(&PlacementRequest::new(5, 0, "north"), &room).unwrap_err();
/// assert_eq!(err.message_for(FormField::X).as_deref(), Some("X must be less than 5"));
/// assert_eq!(err.len(), 1);
/// ```
pub fn validate_placement(
    request: &PlacementRequest,
    room: &Room,
) -> Result<PlacedPose, PlacementError> {
    let mut errors = PlacementError::new();

    let x = parse_field(&request.x).and_then(|v| check_range(v, room.width()));
    let y = parse_field(&request.y).and_then(|v| check_range(v, room.height()));
    let direction = match Direction::parse_optional(&request.direction) {
        Ok(Some(d)) => Ok(d),
        Ok(None) => Err(FieldError::Required),
        Err(e) => Err(FieldError::UnknownDirection { input: e.input }),
    };

    match (x, y, direction) {
        (Ok(x), Ok(y), Ok(direction)) => Ok(PlacedPose::new(x, y, direction)),
        (x, y, direction) => {
            if let Err(e) = x {
                errors.push(FormField::X, e);
            }
            if let Err(e) = y {
                errors.push(FormField::Y, e);
            }
            if let Err(e) = direction {
                errors.push(FormField::Direction, e);
            }
            Err(errors)
        }
    }
}

/// Validate already-parsed values against `room`.
///
/// `None` for the heading is the "no heading selected" case and is
/// reported as a missing direction.
pub fn place(
    x: i64,
    y: i64,
    direction: Option<Direction>,
    room: &Room,
) -> Result<PlacedPose, PlacementError> {
    let mut errors = PlacementError::new();
    let x = check_range(x, room.width()).map_err(|e| errors.push(FormField::X, e));
    let y = check_range(y, room.height()).map_err(|e| errors.push(FormField::Y, e));
    let direction = direction.ok_or_else(|| errors.push(FormField::Direction, FieldError::Required));
    match (x, y, direction) {
        (Ok(x), Ok(y), Ok(direction)) => Ok(PlacedPose::new(x, y, direction)),
        _ => Err(errors),
    }
}

fn parse_field(input: &FieldInput) -> Result<i64, FieldError> {
    match input {
        FieldInput::Missing => Err(FieldError::Required),
        FieldInput::Number(n) => Ok(*n),
        FieldInput::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Err(FieldError::Required);
            }
            trimmed.parse().map_err(|_| FieldError::NotAWholeNumber {
                input: text.clone(),
            })
        }
    }
}

fn check_range(value: i64, limit: u32) -> Result<i32, FieldError> {
    if value < 0 {
        return Err(FieldError::BelowMinimum { min: 0 });
    }
    if value >= i64::from(limit) {
        return Err(FieldError::NotBelow { limit });
    }
    i32::try_from(value).map_err(|_| FieldError::NotBelow { limit })
}
