//! Runs every searcher on the worked examples and prints the answers

use anyhow::Result;
use sorted_search::SEARCHERS;

fn main() -> Result<()> {
    let data = [1, 2, 5, 7, 9, 11];
    let data_lower = [1, 2, 5, 6, 6, 7, 8];
    let data_upper = [1, 2, 5, 7, 7, 8, 8];
    let data_insert = [1, 2, 4, 4, 5, 6];
    let data_occurrences = [1, 2, 3, 5, 5, 5, 6, 8];

    for s in SEARCHERS {
        println!("Binary search for 7 ({}): {:?}", s.name(), s.find(&data, 7));
        println!("Lower bound of 8 ({}): {}", s.name(), s.lower_bound(&data_lower, 8));
        println!("Upper bound of 7 ({}): {}", s.name(), s.upper_bound(&data_upper, 7));
        println!("Search insert 4 ({}): {}", s.name(), s.search_insert(&data_insert, 4));
        println!(
            "First and last of 5 ({}): {:?} {:?}",
            s.name(),
            s.first_occurrence(&data_occurrences, 5),
            s.last_occurrence(&data_occurrences, 5)
        );
        println!(
            "Occurrences of 5 ({}): {}",
            s.name(),
            s.count_occurrences(&data_occurrences, 5)
        );
    }
    Ok(())
}
