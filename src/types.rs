use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonReward {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub points: Option<u32>,
    #[serde(default)]
    pub image: Option<String>,
}

/// The authenticated user's standing in one season.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRank {
    #[serde(default, alias = "rank")]
    pub position: Option<u32>,
    #[serde(default, alias = "total_season_points")]
    pub points: Option<u32>,
    #[serde(default)]
    pub league: Option<String>,
    #[serde(default)]
    pub total_ranks: Option<u32>,
    #[serde(default)]
    pub next_rank: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFollowers {
    #[serde(default)]
    pub followers: Vec<Follower>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Follower {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonMachine {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub os: Option<String>,
    #[serde(default, alias = "difficulty_text")]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub release_time: Option<String>,
    #[serde(default)]
    pub active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveMachine {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub os: Option<String>,
    #[serde(default, alias = "difficulty_text")]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub release_time: Option<String>,
    #[serde(default)]
    pub is_owned_user: bool,
    #[serde(default)]
    pub is_owned_root: bool,
}
