use crate::types::Move;
use rand::Rng;

/// Genome representation for the move search
///
/// A genome is an ordered sequence of moves from the five-symbol alphabet.
/// Its length is not fixed: mutation can append or delete genes and
/// crossover between parents of different lengths decides what happens to
/// the longer parent's tail.
///
/// # Ownership
///
/// Every genome belongs to exactly one `Individual`. Operators never share
/// storage between parents and children:
/// - **Crossover**: the child is built into a freshly allocated genome
/// - **Mutation**: edits the genome of the individual it is given, in place
///
/// # Conversion
///
/// The scoring service sees a genome as a string with one character per gene.
///
/// ```
/// use evomoves::engines::generation::genome::{genome_from_str, genome_to_string};
///
/// let genome = genome_from_str("RL+-/");
/// assert_eq!(genome_to_string(&genome), "RL+-/");
/// ```
pub type Genome = Vec<Move>;

pub fn genome_to_string(genome: &[Move]) -> String {
    genome.iter().map(|m| m.as_char()).collect()
}

/// Bytes outside the alphabet decode to `Move::Freeze`.
pub fn genome_from_str(text: &str) -> Genome {
    text.bytes().map(Move::from_byte).collect()
}

pub fn random_genome<R: Rng>(length: usize, rng: &mut R) -> Genome {
    (0..length).map(|_| Move::random(rng)).collect()
}
