use num_derive::{FromPrimitive, ToPrimitive};
use strum::{Display, EnumString};

use crate::id::Id;

#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Reaction {
    Like    = 1,
    Dislike = -1,
}

impl Reaction {
    pub const fn opposite(self) -> Self {
        match self {
            Self::Like => Self::Dislike,
            Self::Dislike => Self::Like,
        }
    }
}

/// Likes and dislikes of a station or a comment.
///
/// Each user has at most one reaction per target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reactions {
    pub liked_by: Vec<Id>,
    pub disliked_by: Vec<Id>,
}

impl Reactions {
    pub fn likes(&self) -> usize {
        self.liked_by.len()
    }

    pub fn dislikes(&self) -> usize {
        self.disliked_by.len()
    }

    pub fn reaction_of(&self, user_id: &Id) -> Option<Reaction> {
        if self.liked_by.contains(user_id) {
            Some(Reaction::Like)
        } else if self.disliked_by.contains(user_id) {
            Some(Reaction::Dislike)
        } else {
            None
        }
    }

    /// Reacting twice in the same way withdraws the reaction,
    /// the opposite reaction replaces it.
    ///
    /// Returns the reaction of the user afterwards.
    pub fn toggle(&mut self, user_id: &Id, reaction: Reaction) -> Option<Reaction> {
        let previous = self.reaction_of(user_id);
        self.voters_mut(reaction.opposite()).retain(|id| id != user_id);
        if previous == Some(reaction) {
            self.voters_mut(reaction).retain(|id| id != user_id);
            None
        } else {
            self.voters_mut(reaction).push(user_id.clone());
            Some(reaction)
        }
    }

    fn voters_mut(&mut self, reaction: Reaction) -> &mut Vec<Id> {
        match reaction {
            Reaction::Like => &mut self.liked_by,
            Reaction::Dislike => &mut self.disliked_by,
        }
    }
}
