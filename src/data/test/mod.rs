mod user_xp;
