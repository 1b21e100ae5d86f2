//! Win-probability table shown by the help option

use super::types::Dice;
use std::fmt;

/// Share of the other dice a dice beats on sum
#[derive(Clone, Debug, PartialEq)]
pub struct WinProbability<'a> {
    pub dice: &'a Dice,
    pub wins: usize,
    pub comparisons: usize,
    pub percent: f64,
}

impl fmt::Display for WinProbability<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] - {:.2}%", self.dice, self.percent)
    }
}

/// Ties count toward `comparisons` only, never toward `wins`.
pub fn win_probabilities(dice: &[Dice]) -> Vec<WinProbability<'_>> {
    dice.iter()
        .enumerate()
        .map(|(index, current)| {
            let mut wins = 0;
            let mut comparisons = 0;

            for (opponent_index, opponent) in dice.iter().enumerate() {
                if index != opponent_index {
                    comparisons += 1;
                    if current.sum() > opponent.sum() {
                        wins += 1;
                    }
                }
            }

            // A lone dice has nothing to beat
            let percent = if comparisons == 0 {
                0.0
            } else {
                wins as f64 / comparisons as f64 * 100.0
            };

            WinProbability {
                dice: current,
                wins,
                comparisons,
                percent,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dice(faces: &str) -> Dice {
        faces.parse().unwrap()
    }

    #[test]
    fn test_equal_sums_are_all_ties() {
        let set = vec![
            dice("2,2,4,4,9,9"),
            dice("1,1,6,6,8,8"),
            dice("3,3,5,5,7,7"),
        ];

        let probabilities = win_probabilities(&set);
        assert_eq!(probabilities.len(), 3);
        for p in &probabilities {
            assert_eq!(p.wins, 0);
            assert_eq!(p.comparisons, 2);
            assert_eq!(p.percent, 0.0);
        }
    }

    #[test]
    fn test_distinct_sums() {
        let set = vec![dice("10"), dice("20"), dice("30"), dice("40")];

        let probabilities = win_probabilities(&set);
        assert_eq!(probabilities[0].percent, 0.0);
        assert_eq!(probabilities[3].percent, 100.0);
        assert_eq!(probabilities[3].wins, 3);
        assert!((probabilities[1].percent - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_tie_is_not_half_a_win() {
        let set = vec![dice("5"), dice("5"), dice("1")];

        let probabilities = win_probabilities(&set);
        assert_eq!(probabilities[0].wins, 1);
        assert_eq!(probabilities[0].percent, 50.0);
        assert_eq!(probabilities[2].percent, 0.0);
    }

    #[test]
    fn test_single_dice() {
        let set = vec![dice("1,2,3")];
        let probabilities = win_probabilities(&set);
        assert_eq!(probabilities[0].comparisons, 0);
        assert_eq!(probabilities[0].percent, 0.0);
    }

    #[test]
    fn test_display() {
        let set = vec![dice("1,2"), dice("3,4"), dice("5,6")];
        let probabilities = win_probabilities(&set);
        assert_eq!(probabilities[1].to_string(), "[3,4] - 50.00%");
        assert_eq!(probabilities[2].to_string(), "[5,6] - 100.00%");
    }
}
