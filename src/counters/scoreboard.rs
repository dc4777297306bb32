use crate::storage::models::{Counter, ScoreEntry};

/// One row of a leaderboard, `rank` starts at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub rank: usize,
    pub user: String,
    pub count: i64,
}

/// Credits `user` with one point and re-ranks the board. Returns the user's new score.
pub fn record(scoreboard: &mut Vec<ScoreEntry>, user: &str) -> i64 {
    let score = match scoreboard.iter_mut().find(|entry| entry.user == user) {
        Some(entry) => {
            entry.count = entry.count.saturating_add(1);
            entry.count
        }
        None => {
            scoreboard.push(ScoreEntry { user: user.to_string(), count: 1 });
            1
        }
    };

    // stable: ties keep their previous relative order
    scoreboard.sort_by(|a, b| b.count.cmp(&a.count));
    score
}

pub fn top_n(scoreboard: &[ScoreEntry], n: usize) -> Vec<Placement> {
    scoreboard
        .iter()
        .take(n)
        .enumerate()
        .map(|(i, entry)| Placement {
            rank: i + 1,
            user: entry.user.clone(),
            count: entry.count,
        })
        .collect()
}

impl Counter {
    /// Bumps the total, and the caller's scoreboard entry when `scorer` is given.
    pub fn increment(&mut self, scorer: Option<&str>) -> i64 {
        self.count = self.count.saturating_add(1);
        if let Some(user) = scorer {
            record(&mut self.scoreboard, user);
        }
        self.count
    }

    pub fn top(&self, n: usize) -> Vec<Placement> {
        top_n(&self.scoreboard, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(entries: &[(&str, i64)]) -> Vec<ScoreEntry> {
        entries
            .iter()
            .map(|(user, count)| ScoreEntry { user: user.to_string(), count: *count })
            .collect()
    }

    fn is_sorted_descending(scoreboard: &[ScoreEntry]) -> bool {
        scoreboard.windows(2).all(|w| w[0].count >= w[1].count)
    }

    #[test]
    fn new_user_is_appended_with_one_point() {
        let mut scores = board(&[("alice", 2)]);
        assert_eq!(record(&mut scores, "bob"), 1);
        assert_eq!(scores, board(&[("alice", 2), ("bob", 1)]));
    }

    #[test]
    fn existing_user_is_the_only_entry_touched() {
        let mut scores = board(&[("alice", 2), ("bob", 1), ("carol", 1)]);
        assert_eq!(record(&mut scores, "carol"), 2);
        assert_eq!(scores, board(&[("alice", 2), ("carol", 2), ("bob", 1)]));
    }

    #[test]
    fn lookup_matches_by_name_not_position() {
        let mut scores = board(&[("alice", 5)]);
        record(&mut scores, "bob");
        record(&mut scores, "bob");
        assert_eq!(scores, board(&[("alice", 5), ("bob", 2)]));
    }

    #[test]
    fn overtaking_user_moves_up_and_ties_stay_stable() {
        let mut scores = Vec::new();
        for user in ["a", "b", "c", "b", "c", "c", "a"] {
            record(&mut scores, user);
            assert!(is_sorted_descending(&scores));
        }
        assert_eq!(scores, board(&[("c", 3), ("a", 2), ("b", 2)]));
    }

    #[test]
    fn top_n_truncates_and_ranks_from_one() {
        let scores = board(&[("a", 9), ("b", 7), ("c", 4), ("d", 1)]);
        let top = top_n(&scores, 3);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0], Placement { rank: 1, user: "a".into(), count: 9 });
        assert_eq!(top[2], Placement { rank: 3, user: "c".into(), count: 4 });
        assert!(top_n(&[], 3).is_empty());
    }

    #[test]
    fn counter_increment_without_scorer_leaves_board_alone() {
        let mut counter = Counter::new("deaths");
        assert_eq!(counter.increment(None), 1);
        assert_eq!(counter.increment(None), 2);
        assert!(counter.scoreboard.is_empty());

        let mut boops = Counter::new("boops");
        boops.increment(Some("alice"));
        assert_eq!(boops.count, 1);
        assert_eq!(boops.top(3)[0].user, "alice");
    }

    #[test]
    fn totals_stop_at_the_integer_limit() {
        let mut counter = Counter::new("deaths");
        counter.count = i64::MAX;
        assert_eq!(counter.increment(None), i64::MAX);

        let mut scores = board(&[("alice", i64::MAX)]);
        assert_eq!(record(&mut scores, "alice"), i64::MAX);
    }
}
