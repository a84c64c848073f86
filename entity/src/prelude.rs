pub use super::event::Entity as Event;
pub use super::event_attendee::Entity as EventAttendee;
pub use super::event_group::Entity as EventGroup;
pub use super::event_host::Entity as EventHost;
pub use super::group::Entity as Group;
pub use super::group_captain::Entity as GroupCaptain;
pub use super::group_member::Entity as GroupMember;
pub use super::profile::Entity as Profile;
pub use super::session::Entity as Session;
pub use super::user::Entity as User;
