// Test basic macro usage compiles and builds the name table
use replies_macros::reply_kinds;

reply_kinds! {
    pub enum Kind {
        Success,
        ErrCooldown,
        UserInfo,
    }
}

fn main() {
    assert_eq!(Kind::ALL, &[Kind::Success, Kind::ErrCooldown, Kind::UserInfo]);
    assert_eq!(Kind::NAMES, &["SUCCESS", "ERR_COOLDOWN", "USER_INFO"]);

    assert_eq!(Kind::ErrCooldown.name(), "ERR_COOLDOWN");
    assert_eq!(Kind::from_name("USER_INFO"), Some(Kind::UserInfo));
    assert_eq!(Kind::from_name("UserInfo"), None);

    for (index, kind) in Kind::ALL.iter().enumerate() {
        assert_eq!(kind.index(), index);
        assert_eq!(Kind::from_name(kind.name()), Some(*kind));
    }

    assert_eq!(Kind::Success.to_string(), "SUCCESS");
}
