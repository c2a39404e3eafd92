use crate::repositories::*;

/// Access to all repositories at once.
pub trait Db: UserRepo + StationRepo + CommentRepo + BookingRepo + CarProfileRepo {}

impl<T> Db for T where T: UserRepo + StationRepo + CommentRepo + BookingRepo + CarProfileRepo {}
