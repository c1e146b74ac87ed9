//! Text rendering of statistics for chat replies.
//!
//! Season averages and single-game boxscores report shooting percentages
//! differently: averages are scaled to percent and rounded to two decimals,
//! boxscores print the API value untouched followed by `%`.

use serde_json::Number;

use crate::nba::types::{BoxScore, Game, Player, SeasonAverage};


/// Shown instead of a stats block when no season averages exist yet.
pub fn no_season_info(player: &Player) -> String {
    format!("No info on {}", player.full_name())
}

/// Fraction (0.493) to percent text (49.30).
pub fn scaled_pct(fraction: f64) -> String {
    format!("{:.2}", fraction * 100.0)
}

fn raw(value: &Option<Number>) -> String {
    value
        .as_ref()
        .map_or_else(|| "-".to_string(), Number::to_string)
}

/// Ten-line season summary.
pub fn format_season_average(player: &Player, avg: &SeasonAverage) -> String {
    let lines = [
        player.full_name(),
        // Season line brings the block to ten lines; the stat lines alone make nine.
        format!("Season: {}", avg.season),
        format!("Games played: {}, mins: {}", avg.games_played, avg.min),
        format!("fga: {}, fgm: {}", avg.fga, avg.fgm),
        format!("3pa: {}, 3pm: {}", avg.fg3a, avg.fg3m),
        format!("fta: {}, ftm: {}", avg.fta, avg.ftm),
        format!("reb: {}, dreb: {}, oreb: {}", avg.reb, avg.dreb, avg.oreb),
        format!("ast: {}, stl: {}, blk: {}", avg.ast, avg.stl, avg.blk),
        format!("turnover: {}, pts: {}", avg.turnover, avg.pts),
        format!(
            "fg%: {}%, 3pt%: {}% ft%: {}%",
            scaled_pct(avg.fg_pct),
            scaled_pct(avg.fg3_pct),
            scaled_pct(avg.ft_pct)
        ),
    ];
    lines.join("\n")
}

/// One player's line for one game, headed by the matchup.
pub fn format_boxscore(player: &Player, game: &Game, stats: &BoxScore) -> String {
    let minutes = stats.min.as_deref().unwrap_or("-");
    let lines = [
        format!(
            "{}, {} vs {}",
            player.full_name(),
            game.home_team,
            game.visitor_team
        ),
        format!("mins: {}, pts: {}", minutes, raw(&stats.pts)),
        format!("fga: {}, fgm: {}", raw(&stats.fga), raw(&stats.fgm)),
        format!("3pa: {}, 3pm: {}", raw(&stats.fg3a), raw(&stats.fg3m)),
        format!("fta: {}, ftm: {}", raw(&stats.fta), raw(&stats.ftm)),
        format!(
            "reb: {}, dreb: {}, oreb: {}",
            raw(&stats.reb),
            raw(&stats.dreb),
            raw(&stats.oreb)
        ),
        format!(
            "ast: {}, stl: {}, blk: {}",
            raw(&stats.ast),
            raw(&stats.stl),
            raw(&stats.blk)
        ),
        // Percentages are printed as delivered; no scaling here.
        format!(
            "turnover: {}, fg%: {}%, 3pt%: {}% ft%: {}%",
            raw(&stats.turnover),
            raw(&stats.fg_pct),
            raw(&stats.fg3_pct),
            raw(&stats.ft_pct)
        ),
    ];
    lines.join("\n")
}
