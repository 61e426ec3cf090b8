use serde::{Deserialize, Serialize};
use utils::period::Period;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct LeaderboardEntry {
    pub principal_id: String,
    pub username: String,
    pub rank: u32,
    pub games_played: u32,
    pub score: f64,
    pub reward: Option<u32>,
}

const USERNAMES: [&str; 16] = [
    "meshmate", "kubenaut", "sidecar", "layer5er", "envoyer", "istiod", "linkerd",
    "cilium", "smi_spec", "nighthawk", "meshery", "grpcio", "helmsman", "podwise",
    "tracer", "opsvault",
];

const REWARDED_RANKS: u32 = 10;

fn participant_count(period: Period) -> u32 {
    match period {
        Period::Daily => 8,
        Period::Weekly => 23,
        Period::Monthly => 47,
        Period::Quarterly => 64,
        Period::Yearly => 90,
        Period::All => 120,
    }
}

fn reward_for_rank(rank: u32) -> u32 {
    (REWARDED_RANKS + 1 - rank) * 50
}

/// In-memory leaderboard for `period`, ranked by score.
pub fn entries_for(period: Period) -> Vec<LeaderboardEntry> {
    let seed = Period::ALL
        .iter()
        .position(|p| *p == period)
        .unwrap_or_default() as u64
        + 1;

    let mut entries: Vec<LeaderboardEntry> = (0..participant_count(period))
        .map(|i| {
            let mix = (u64::from(i) * 7_919 + seed * 104_729) % 10_007;
            let name = USERNAMES[i as usize % USERNAMES.len()];
            LeaderboardEntry {
                principal_id: format!("user-{i:04}"),
                username: format!("{name}{i}"),
                rank: 0,
                games_played: (mix % 97) as u32 + 1,
                score: (mix % 5_000) as f64,
                reward: None,
            }
        })
        .collect();

    entries.sort_by(|a, b| b.score.total_cmp(&a.score));
    for (idx, entry) in entries.iter_mut().enumerate() {
        entry.rank = idx as u32 + 1;
        entry.reward = (entry.rank <= REWARDED_RANKS).then(|| reward_for_rank(entry.rank));
    }
    entries
}
