pub const MAX_SESSIONS: usize = 1024;
