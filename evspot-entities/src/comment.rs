use crate::{id::Id, reaction::Reactions, time::Timestamp};

/// A star rating between 1 and 5 that may accompany a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CommentRating(u8);

impl CommentRating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn try_new(value: i64) -> Option<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : Id,
    pub station_id : Id,
    pub author     : Option<Id>,
    pub text       : String,
    pub rating     : Option<CommentRating>,
    pub created_at : Timestamp,
    pub reactions  : Reactions,
}

impl Comment {
    pub fn is_written_by(&self, user_id: &Id) -> bool {
        self.author.as_ref() == Some(user_id)
    }
}

/// Average of all rated comments, rounded to one decimal.
pub fn avg_comment_rating<'a>(comments: impl IntoIterator<Item = &'a Comment>) -> Option<f64> {
    let (sum, count) = comments
        .into_iter()
        .filter_map(|c| c.rating)
        .fold((0u32, 0u32), |(sum, count), r| {
            (sum + u32::from(r.value()), count + 1)
        });
    (count > 0).then(|| (f64::from(sum) / f64::from(count) * 10.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(rating: Option<u8>) -> Comment {
        Comment {
            id: Id::new(),
            station_id: Id::new(),
            author: None,
            text: "ok".into(),
            rating: rating.and_then(|r| CommentRating::try_new(r.into())),
            created_at: Timestamp::now(),
            reactions: Default::default(),
        }
    }

    #[test]
    fn rating_range() {
        assert!(CommentRating::try_new(0).is_none());
        assert!(CommentRating::try_new(6).is_none());
        assert!(CommentRating::try_new(-1).is_none());
        assert_eq!(3, CommentRating::try_new(3).unwrap().value());
    }

    #[test]
    fn average_of_rated_comments() {
        assert_eq!(None, avg_comment_rating(&[comment(None)]));
        let comments = [comment(Some(5)), comment(None), comment(Some(4)), comment(Some(4))];
        assert_eq!(Some(4.3), avg_comment_rating(&comments));
    }
}
