//! Category bitmasks → Rapier collision groups.

use ab_core::{CategoryMask, CollisionCategory};
use bevy_rapier2d::prelude::{CollisionGroups, Group};

pub fn group(mask: CategoryMask) -> Group {
    Group::from_bits_truncate(mask.bits())
}

/// Membership = the category's own bit; filter = what it may touch.
/// Rapier only reports a pair when each side's filter admits the other's membership.
pub fn collision_groups(category: CollisionCategory) -> CollisionGroups {
    CollisionGroups::new(group(category.mask()), group(category.collides_with()))
}

/// Whether two categories produce a contact pair.
pub fn pair_interacts(a: CollisionCategory, b: CollisionCategory) -> bool {
    a.collides_with().intersects(b.mask()) && b.collides_with().intersects(a.mask())
}
