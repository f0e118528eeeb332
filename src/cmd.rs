use clap::Parser;
use tokio_util::sync::CancellationToken;

use htbseasons::types::{SeasonMachine, SeasonReward};
use htbseasons::{Client, Error};

#[derive(Parser, Debug)]
pub enum Cmd {
    /// All seasons
    List,
    /// Machines of the current season
    Machines,
    /// The machine currently live in the season
    ActiveMachine,
    /// Rewards of a season
    Rewards { id: u32 },
    /// Your rank in a season
    Rank { id: u32 },
    /// Your followers in a season
    Followers { id: u32 },
}

fn print_machines(machines: &[SeasonMachine]) {
    println!("Id | Difficulty | OS | Name");
    for m in machines {
        println!(
            " {} | {} | {} | {}",
            m.id,
            m.difficulty.as_deref().unwrap_or("-"),
            m.os.as_deref().unwrap_or("-"),
            m.name
        );
    }
}

fn print_rewards(rewards: &[SeasonReward]) {
    println!("Points | Reward");
    for r in rewards {
        let points = r.points.map(|p| p.to_string()).unwrap_or_else(|| "-".into());
        println!(" {} | {}", points, r.name);
    }
}

// surfaces what support needs when the platform answered with an error
fn report(err: Error) -> anyhow::Error {
    if let Some(meta) = err.meta() {
        tracing::error!(status = meta.status, cf_ray = meta.cf_ray.as_deref(), "request rejected");
    }
    err.into()
}

impl Cmd {
    pub async fn run(self, client: Client, cancel: CancellationToken) -> anyhow::Result<()> {
        let seasons = client.seasons();

        match self {
            Cmd::List => {
                let list = seasons.list(&cancel).await.map_err(report)?;
                println!("Id | Active | Name");
                for s in list.data {
                    println!(" {} | {} | {}", s.id, if s.active { "*" } else { " " }, s.name);
                }
            }
            Cmd::Machines => {
                let machines = seasons.machines(&cancel).await.map_err(report)?;
                print_machines(&machines.data);
            }
            Cmd::ActiveMachine => {
                let m = seasons.active_machine(&cancel).await.map_err(report)?.data;
                println!(
                    "{} ({}) {} | user owned: {} | root owned: {}",
                    m.name,
                    m.id,
                    m.difficulty.as_deref().unwrap_or("-"),
                    m.is_owned_user,
                    m.is_owned_root
                );
            }
            Cmd::Rewards { id } => {
                let rewards = seasons.season(id).rewards(&cancel).await.map_err(report)?;
                print_rewards(&rewards.data);
            }
            Cmd::Rank { id } => {
                let rank = seasons.season(id).user_rank(&cancel).await.map_err(report)?.data;
                println!("League | Rank | Points");
                println!(
                    " {} | {}/{} | {}",
                    rank.league.as_deref().unwrap_or("-"),
                    rank.position.map(|p| p.to_string()).unwrap_or_else(|| "-".into()),
                    rank.total_ranks.map(|t| t.to_string()).unwrap_or_else(|| "-".into()),
                    rank.points.unwrap_or(0)
                );
            }
            Cmd::Followers { id } => {
                let followers = seasons
                    .season(id)
                    .user_followers(&cancel)
                    .await
                    .map_err(report)?;
                println!("Id | Name");
                for f in followers.data.followers {
                    println!(" {} | {}", f.id, f.name);
                }
            }
        }

        Ok(())
    }
}
