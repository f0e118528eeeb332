use crate::meta::ResponseMeta;
use crate::types::*;

/// A decoded payload together with the metadata of the response it came from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Envelope<T> {
    pub data: T,
    pub meta: ResponseMeta,
}

pub type ListResponse = Envelope<Vec<Season>>;
pub type MachinesResponse = Envelope<Vec<SeasonMachine>>;
pub type ActiveMachineResponse = Envelope<ActiveMachine>;
pub type RewardsResponse = Envelope<Vec<SeasonReward>>;
pub type UserRankResponse = Envelope<UserRank>;
pub type UserFollowersResponse = Envelope<UserFollowers>;
