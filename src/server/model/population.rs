//! Lookup table used to expand profile references on read.

use std::collections::HashMap;

use crate::model::reference::{ProfileRef, ProfileSummaryDto, UserSummaryDto};

/// A referenced profile together with its owning user.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSummary {
    pub profile_id: String,
    pub image: Option<String>,
    pub user_id: String,
    pub user_name: String,
}

/// Profiles resolved for one read, keyed by profile id.
#[derive(Debug, Clone, Default)]
pub struct ProfileDirectory {
    profiles: HashMap<String, ProfileSummary>,
}

impl ProfileDirectory {
    pub fn new(summaries: Vec<ProfileSummary>) -> Self {
        Self {
            profiles: summaries
                .into_iter()
                .map(|summary| (summary.profile_id.clone(), summary))
                .collect(),
        }
    }

    /// Expands `profile_id` to an embedded summary, or returns it unchanged when the
    /// profile is unknown.
    ///
    /// # Arguments
    /// - `profile_id` - Stored reference
    /// - `with_image` - Whether the summary carries the profile image
    pub fn resolve(&self, profile_id: String, with_image: bool) -> ProfileRef {
        match self.profiles.get(&profile_id) {
            Some(summary) => ProfileRef::Populated(ProfileSummaryDto {
                id: profile_id,
                image: if with_image {
                    summary.image.clone()
                } else {
                    None
                },
                user_id: UserSummaryDto {
                    id: summary.user_id.clone(),
                    name: summary.user_name.clone(),
                },
            }),
            None => ProfileRef::Id(profile_id),
        }
    }
}
