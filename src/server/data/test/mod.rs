mod blizzard;
mod raid_helper;
mod warcraft_logs;
