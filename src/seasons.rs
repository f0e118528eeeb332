//! Seasons: the season list, the season's machines, and per-season standings.

use tokio_util::sync::CancellationToken;

use crate::client::Client;
use crate::envelope::*;
use crate::error::Error;
use crate::parse::parse;
use crate::pipeline::execute;
use crate::types::*;

#[derive(Clone, Debug)]
pub struct Service {
    client: Client,
}

/// One season, by id.
#[derive(Clone, Debug)]
pub struct Handle {
    client: Client,
    id: u32,
}

impl Service {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Returns a handle scoped to season `id`. No request is made.
    ///
    /// ```no_run
    /// # async fn run() -> Result<(), htbseasons::Error> {
    /// use htbseasons::{Client, Config};
    /// use tokio_util::sync::CancellationToken;
    ///
    /// let client = Client::new(Config::from_env()?)?;
    /// let rewards = client.seasons().season(7).rewards(&CancellationToken::new()).await?;
    /// for reward in rewards.data {
    ///     println!("{} ({:?} points)", reward.name, reward.points);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn season(&self, id: u32) -> Handle {
        Handle {
            client: self.client.clone(),
            id,
        }
    }

    /// Every season, past and current.
    pub async fn list(&self, cancel: &CancellationToken) -> Result<ListResponse, Error> {
        let api = self.client.v4();
        execute(
            self.client.limiter(),
            cancel,
            "season_list",
            || api.get_season_list(),
            parse::<Vec<Season>>,
        )
        .await
    }

    /// Machines that are part of the current season.
    pub async fn machines(&self, cancel: &CancellationToken) -> Result<MachinesResponse, Error> {
        let api = self.client.v4();
        execute(
            self.client.limiter(),
            cancel,
            "season_machines",
            || api.get_season_machines(),
            parse::<Vec<SeasonMachine>>,
        )
        .await
    }

    pub async fn active_machine(
        &self,
        cancel: &CancellationToken,
    ) -> Result<ActiveMachineResponse, Error> {
        let api = self.client.v4();
        execute(
            self.client.limiter(),
            cancel,
            "season_machine_active",
            || api.get_season_machine_active(),
            parse::<ActiveMachine>,
        )
        .await
    }
}

impl Handle {
    pub fn id(&self) -> u32 {
        self.id
    }

    pub async fn rewards(&self, cancel: &CancellationToken) -> Result<RewardsResponse, Error> {
        let api = self.client.v4();
        execute(
            self.client.limiter(),
            cancel,
            "season_rewards",
            || api.get_season_rewards(self.id),
            parse::<Vec<SeasonReward>>,
        )
        .await
    }

    /// The authenticated user's rank in this season.
    pub async fn user_rank(&self, cancel: &CancellationToken) -> Result<UserRankResponse, Error> {
        let api = self.client.v4();
        execute(
            self.client.limiter(),
            cancel,
            "season_user_rank",
            || api.get_season_user_rank(self.id),
            parse::<UserRank>,
        )
        .await
    }

    pub async fn user_followers(
        &self,
        cancel: &CancellationToken,
    ) -> Result<UserFollowersResponse, Error> {
        let api = self.client.v4();
        execute(
            self.client.limiter(),
            cancel,
            "season_user_followers",
            || api.get_season_user_followers(self.id),
            parse::<UserFollowers>,
        )
        .await
    }
}
