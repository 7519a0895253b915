/// Batch scorer for genomes.
///
/// Implementations receive genome strings (one character per gene) and must
/// answer with one score per genome, in request order. Scorers backed by an
/// unreliable service are expected to degrade to `0.0` for the whole batch
/// instead of failing; callers still guard against a response of the wrong
/// length.
///
/// An empty request must produce an empty response.
pub trait FitnessOracle {
    fn evaluate(&self, genomes: &[String]) -> Vec<f64>;
}

impl<T: FitnessOracle + ?Sized> FitnessOracle for Box<T> {
    fn evaluate(&self, genomes: &[String]) -> Vec<f64> {
        (**self).evaluate(genomes)
    }
}

impl<T: FitnessOracle + ?Sized> FitnessOracle for &T {
    fn evaluate(&self, genomes: &[String]) -> Vec<f64> {
        (**self).evaluate(genomes)
    }
}
