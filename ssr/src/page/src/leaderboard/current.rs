use super::sample::{entries_for, LeaderboardEntry};
use component::leaderboard::{TableColumn, TableComponent};
use leptos::prelude::*;
use utils::{period::Period, table::ColumnDef};

fn rank_class(rank: u32) -> &'static str {
    match rank {
        1 => "bg-gradient-to-r from-[#BF760B] via-[#FFE89F] to-[#C38F14] bg-clip-text text-transparent font-bold",
        2 => "bg-gradient-to-r from-[#2F2F30] via-[#FFFFFF] to-[#4B4B4B] bg-clip-text text-transparent font-bold",
        3 => "bg-gradient-to-r from-[#6D4C35] via-[#DBA374] to-[#9F7753] bg-clip-text text-transparent font-bold",
        _ => "text-white",
    }
}

fn columns() -> Vec<TableColumn<LeaderboardEntry>> {
    vec![
        TableColumn::new(ColumnDef::new("rank", |e: &LeaderboardEntry| e.rank).header("Rank"))
            .with_cell(|e: &LeaderboardEntry| {
                view! {
                    <span class=format!("text-lg {}", rank_class(e.rank))>
                        {format!("#{}", e.rank)}
                    </span>
                }
            }),
        TableColumn::new(
            ColumnDef::new("username", |e: &LeaderboardEntry| e.username.clone())
                .header("Username"),
        )
        .with_cell(|e: &LeaderboardEntry| {
            view! {
                <span class="text-white font-medium">{format!("@{}", e.username)}</span>
            }
        }),
        ColumnDef::new("games_played", |e: &LeaderboardEntry| e.games_played)
            .header("Games Played")
            .into(),
        TableColumn::new(ColumnDef::new("score", |e: &LeaderboardEntry| e.score).header("Score"))
            .with_cell(|e: &LeaderboardEntry| format!("{:.0}", e.score)),
        TableColumn::new(
            ColumnDef::new("reward", |e: &LeaderboardEntry| e.reward)
                .header("Rewards")
                .filterable(false),
        )
        .with_cell(|e: &LeaderboardEntry| {
            e.reward
                .map(|r| r.to_string())
                .unwrap_or_else(|| "0".to_string())
        }),
    ]
}

#[component]
pub fn Leaderboard() -> impl IntoView {
    let (period, set_period) = signal(Period::default());
    let entries = Memo::new(move |_| entries_for(period.get()));

    let set_option = Callback::new(move |next: Period| {
        log::info!("Leaderboard period: {next}");
        set_period.set(next);
    });

    view! {
        <div class="min-h-screen bg-black text-white">
            <div class="flex items-center justify-center w-full px-4 py-4 border-b border-white/10">
                <span class="text-xl font-bold">Leaderboard</span>
            </div>

            <div class="container mx-auto px-4 py-6 max-w-4xl">
                <TableComponent
                    data=entries
                    columns=columns()
                    no_data="No one has played in this period yet"
                    option=period
                    set_option=set_option
                />
            </div>
        </div>
    }
}
