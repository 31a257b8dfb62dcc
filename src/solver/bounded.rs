use std::thread;
use std::time::Instant;

use crossbeam_channel::{unbounded, RecvTimeoutError};
use log::{debug, info, warn};

use crate::config::{SolverConfig, Strategy};
use crate::level::Level;
use crate::solver::{search, Outcome, SolverOk};

/// Races the configured strategies against `config.timeout`, then falls back to best-first.
///
/// Workers are never stopped, the ones still running after the deadline are left to finish on their own
/// (bounded by `config.max_states` if set) and whatever they send is dropped.
///
/// A raced strategy that exhausts the search space ends the race with `NoSolution` and skips the fallback.
pub(crate) fn solve_bounded(level: &Level, config: &SolverConfig) -> SolverOk {
    if let Some(strategy) = config.strategy {
        info!("Running {} without a deadline", strategy);
        return search(&level.map, &level.state, strategy, config.max_states);
    }

    let raced = race(level, config);
    match raced.outcome {
        Outcome::Solved(_) => return raced,
        // exhausting the search space is final, best-first would only repeat it
        Outcome::NoSolution => return raced,
        Outcome::StateLimit | Outcome::TimedOut => {}
    }
    if !config.fallback {
        return raced;
    }

    info!("Race failed ({}), falling back to {}", raced.outcome, Strategy::BestFirst);
    search(&level.map, &level.state, Strategy::BestFirst, config.max_states)
}

fn race(level: &Level, config: &SolverConfig) -> SolverOk {
    // too far in the future to represent means no deadline
    let deadline = Instant::now().checked_add(config.timeout);
    let (tx, rx) = unbounded();

    let mut running = 0;
    for &strategy in config.raced_strategies() {
        let tx = tx.clone();
        let level = level.clone();
        let max_states = config.max_states;
        let spawned = thread::Builder::new()
            .name(format!("solver-{}", strategy))
            .spawn(move || {
                let res = search(&level.map, &level.state, strategy, max_states);
                // fails if the coordinator is no longer listening
                let _ = tx.send(res);
            });
        match spawned {
            Ok(_) => running += 1,
            Err(err) => warn!("Failed to start {} worker: {}", strategy, err),
        }
    }
    // only the workers hold senders now so a worker dying without a result disconnects the channel
    drop(tx);

    debug!("Racing {} workers for {:?}", running, config.timeout);

    let mut unsolved = None;
    while running > 0 {
        let received = match deadline {
            Some(deadline) => rx.recv_deadline(deadline),
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        };
        match received {
            Ok(res) => {
                running -= 1;
                match res.strategy {
                    Some(strategy) => debug!("{} finished: {}", strategy, res.outcome),
                    None => debug!("Worker finished: {}", res.outcome),
                }
                match res.outcome {
                    Outcome::Solved(_) | Outcome::NoSolution => return res,
                    Outcome::StateLimit | Outcome::TimedOut => {
                        if unsolved.is_none() {
                            unsolved = Some(res);
                        }
                    }
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                info!("Deadline reached, abandoning {} workers", running);
                return SolverOk::timed_out();
            }
            Err(RecvTimeoutError::Disconnected) => {
                warn!("{} workers exited without a result", running);
                break;
            }
        }
    }

    unsolved.unwrap_or_else(SolverOk::timed_out)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use crate::level::codes::*;
    use crate::solver::tests::corridor;
    use crate::Solve;

    /// Open room with the goals walled off, far too many states to search through.
    fn sealed_goals() -> Level {
        let n = 20;
        let mut rows = vec![vec![FLOOR; n]; n];
        for i in 0..n {
            rows[0][i] = WALL;
            rows[n - 1][i] = WALL;
            rows[i][0] = WALL;
            rows[i][n - 1] = WALL;
        }
        for c in 1..4 {
            rows[1][c] = GOAL;
            rows[2][c] = WALL;
        }
        rows[1][4] = WALL;
        rows[8][8] = BOX;
        rows[8][11] = BOX;
        rows[11][8] = BOX;
        rows[10][10] = PLAYER;
        Level::from_codes(&rows).unwrap()
    }

    fn assert_replays(level: &Level, res: &SolverOk) {
        let moves = res.outcome.moves().unwrap();
        let end = level.replay(moves).unwrap();
        assert!(level.map.solved(&end));
    }

    #[test]
    fn direct_strategy() {
        let level = corridor();
        let config = SolverConfig {
            strategy: Some(Strategy::Bfs),
            timeout: Duration::from_secs(0),
            ..SolverConfig::default()
        };
        let res = level.solve_bounded(&config);
        assert_eq!(res.strategy, Some(Strategy::Bfs));
        assert_eq!(res.outcome.moves().unwrap().move_cnt(), 48);
    }

    #[test]
    fn race_solves() {
        let level = corridor();
        let res = level.solve_bounded(&SolverConfig::default());
        assert!(res.strategy.is_some());
        assert_replays(&level, &res);
    }

    #[test]
    fn proven_unsolvable_returns_early() {
        let level: Level = r"
#######
#  $  #
#     #
#  .@ #
#######
"
        .parse()
        .unwrap();
        let started = Instant::now();
        let res = level.solve_bounded(&SolverConfig::default());
        assert_eq!(res.outcome, Outcome::NoSolution);
        assert!(res.strategy.is_some());
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[test]
    fn times_out() {
        let level = sealed_goals();
        let timeout = Duration::from_millis(20);
        let config = SolverConfig {
            timeout,
            fallback: false,
            max_states: Some(500_000),
            ..SolverConfig::default()
        };
        let started = Instant::now();
        let res = level.solve_bounded(&config);
        assert!(started.elapsed() < timeout + Duration::from_secs(2));
        assert_eq!(res.outcome, Outcome::TimedOut);
        assert_eq!(res.strategy, None);
        assert!(res.outcome.into_moves().is_empty());
    }

    #[test]
    fn huge_timeout() {
        let level = corridor();
        let config = SolverConfig {
            timeout: Duration::from_secs(u64::max_value()),
            ..SolverConfig::default()
        };
        let res = level.solve_bounded(&config);
        assert!(res.strategy.is_some());
        assert_replays(&level, &res);
    }

    #[test]
    fn state_limit_without_fallback() {
        let level = corridor();
        let config = SolverConfig {
            fallback: false,
            max_states: Some(10),
            ..SolverConfig::default()
        };
        let res = level.solve_bounded(&config);
        assert_eq!(res.outcome, Outcome::StateLimit);
    }

    #[test]
    fn fallback_after_timeout() {
        let level = corridor();
        let config = SolverConfig {
            timeout: Duration::from_secs(0),
            ..SolverConfig::default()
        };
        let res = level.solve_bounded(&config);
        assert_replays(&level, &res);
    }

    #[test]
    fn no_workers() {
        let level = corridor();
        let mut config = SolverConfig {
            workers: 0,
            ..SolverConfig::default()
        };
        let res = level.solve_bounded(&config);
        assert_eq!(res.strategy, Some(Strategy::BestFirst));
        assert_replays(&level, &res);

        config.fallback = false;
        let res = level.solve_bounded(&config);
        assert_eq!(res.outcome, Outcome::TimedOut);
        assert_eq!(res.strategy, None);
    }
}
