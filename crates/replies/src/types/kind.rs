use replies_macros::reply_kinds;

reply_kinds! {
    /// Identity of a reply, used as the lookup key for templates and
    /// localization overrides.
    ///
    /// ```
    /// use replies::ReplyKind;
    ///
    /// assert_eq!(ReplyKind::GivenCooldown.name(), "GIVEN_COOLDOWN");
    /// assert_eq!(ReplyKind::from_name("ERR_COOLDOWN"), Some(ReplyKind::ErrCooldown));
    /// assert_eq!(ReplyKind::ALL.len(), ReplyKind::NAMES.len());
    /// ```
    pub enum ReplyKind {
        /// Free-form text supplied by the caller.
        Custom,
        Success,
        BooleanConfig,

        ChatJoin,
        ChatLeave,
        UserInChat,
        UserNotInChat,
        GivenCooldown,
        MessageDeleted,
        DeletionQueued,
        PromotedCitizen,
        PromotedPartisan,
        PromotedMod,
        PromotedAdmin,
        KarmaThankYou,
        KarmaGoodNotification,
        KarmaBadNotification,
        TripcodeInfo,
        TripcodeSet,

        ErrCommandDisabled,
        ErrNoReply,
        ErrNotInCache,
        ErrNoUser,
        ErrNoUserById,
        ErrAlreadyWarned,
        ErrNotInCooldown,
        ErrCooldown,
        ErrBlacklisted,
        ErrAlreadyVoted,
        ErrVoteOwnMessage,
        ErrSpammy,
        ErrSpammySign,
        ErrSignPrivacy,
        ErrInvalidTripFormat,
        ErrNoTripcode,
        ErrMediaLimit,
        ErrNoMediaAllowed,
        ErrMediaPermission,

        NotifBadwordValue,
        NotifSetBadword,
        NotifRemoveBadword,

        UserInfo,
        UserInfoMod,
        UserIdRefresh,
        UserNewId,
        UsersInfo,
        UsersInfoExtended,

        ProgramVersion,
        HelpModerator,
        HelpAdmin,
    }
}
