//! Built-in maze layouts

/// The reference 16 × 12 maze
///
/// Entrance on the left edge at (0, 2), exit on the right edge at
/// (15, 8).
pub const REFERENCE_LAYOUT: &str = "\
################
#.#.#.....#....#
E...#.#.#...##.#
#.###.#.######.#
#..#..#......#.#
##...#####.###.#
#..#.#...#.#...#
#.##.#.###.#.###
#..#.#.#.#.#.#.X
##.#...#.#.###.#
#..#.#...#.....#
################
";
