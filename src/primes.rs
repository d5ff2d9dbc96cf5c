/// The first candidate considered, and the smallest bucket count in the table.
pub const FIRST_CANDIDATE: u64 = 1009;

/// Trial division over the 6k ± 1 wheel.
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }

    if n <= 3 {
        return true;
    }

    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i = 5;

    // i <= n / i avoids overflowing i * i near u64::MAX
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }

        i += 6;
    }

    true
}

/// Returns the largest value representable in a `width`-bit unsigned word,
/// or `None` if `width` is not in `1..=64`.
pub fn word_limit(width: u32) -> Option<u64> {
    if width == 0 || width > 64 {
        return None;
    }

    Some(u64::MAX >> (64 - width))
}

/// Why the generator ran out of primes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exhaustion {
    /// The running candidate passed the word limit without hitting a prime.
    CandidateAboveLimit,
    /// A prime was accepted, but twice that prime already exceeds the limit.
    FloorAboveLimit,
}

/// Yields primes starting at 1009, each strictly greater than twice the
/// previous one, until the word limit is reached.
#[derive(Clone, Debug)]
pub struct DoublingPrimes {
    limit: u64,
    candidate: Option<u64>,
    exhaustion: Option<Exhaustion>,
}

impl DoublingPrimes {
    pub fn new(limit: u64) -> Self {
        Self {
            limit,
            candidate: Some(FIRST_CANDIDATE),
            exhaustion: None,
        }
    }

    /// Returns why generation stopped, once the range has been exhausted.
    pub fn exhaustion(&self) -> Option<Exhaustion> {
        self.exhaustion
    }

    fn exhaust(&mut self, reason: Exhaustion) {
        self.candidate = None;
        self.exhaustion = Some(reason);
    }
}

impl Iterator for DoublingPrimes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        loop {
            let candidate = self.candidate?;

            if candidate > self.limit {
                self.exhaust(Exhaustion::CandidateAboveLimit);
                return None;
            }

            if is_prime(candidate) {
                let floor = candidate
                    .checked_mul(2)
                    .and_then(|double| double.checked_add(1))
                    .filter(|&floor| floor <= self.limit);

                match floor {
                    Some(floor) => self.candidate = Some(floor),
                    None => self.exhaust(Exhaustion::FloorAboveLimit),
                }

                return Some(candidate);
            }

            match candidate.checked_add(1) {
                Some(next) => self.candidate = Some(next),
                None => {
                    self.exhaust(Exhaustion::CandidateAboveLimit);
                    return None;
                }
            }
        }
    }
}

/// The outcome of one generation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeTable {
    pub primes: Vec<u64>,
    pub requested: usize,
    pub exhaustion: Option<Exhaustion>,
}

impl PrimeTable {
    /// True if fewer primes were produced than were asked for.
    pub fn is_partial(&self) -> bool {
        self.primes.len() < self.requested
    }

    /// Diagnostic lines describing an early stop or a short table, in the
    /// order they should be reported.
    pub fn notes(&self, width: u32, limit: u64) -> Vec<String> {
        let mut notes = vec![];

        match self.exhaustion {
            Some(Exhaustion::CandidateAboveLimit) => notes.push(format!(
                "Warning: Stopped at {} primes. Next prime would exceed the {}-bit limit",
                self.primes.len(),
                width
            )),
            Some(Exhaustion::FloorAboveLimit) => notes.push(format!(
                "Note: Stopping. Next prime would exceed {}",
                limit
            )),
            None => {}
        }

        if self.is_partial() {
            notes.push(format!(
                "Generated {} primes (requested {})",
                self.primes.len(),
                self.requested
            ));
        }

        notes
    }
}

/// Collects up to `count` doubling primes not exceeding `limit`.
pub fn generate(count: usize, limit: u64) -> PrimeTable {
    let mut primes = DoublingPrimes::new(limit);
    let collected = primes.by_ref().take(count).collect();

    PrimeTable {
        primes: collected,
        requested: count,
        exhaustion: primes.exhaustion(),
    }
}
