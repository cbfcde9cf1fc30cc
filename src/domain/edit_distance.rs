/// Levenshtein distance over Unicode scalar values.
///
/// Insertion, deletion and substitution each cost 1; transpositions are not
/// special-cased, so a swapped pair costs 2. Uses a single rolling row sized
/// by the shorter input.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (longer, shorter) = if a.len() < b.len() { (&b, &a) } else { (&a, &b) };

    if shorter.is_empty() {
        return longer.len();
    }

    let mut previous: Vec<usize> = (0..=shorter.len()).collect();
    let mut current: Vec<usize> = Vec::with_capacity(shorter.len() + 1);

    for (i, &long_char) in longer.iter().enumerate() {
        current.clear();
        current.push(i + 1);
        for (j, &short_char) in shorter.iter().enumerate() {
            let insertion = previous[j + 1] + 1;
            let deletion = current[j] + 1;
            let substitution = previous[j] + usize::from(long_char != short_char);
            current.push(insertion.min(deletion).min(substitution));
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[shorter.len()]
}
