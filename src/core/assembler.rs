use crate::core::types::{Cluster, GraphemeCluster, Letter, Unit, Vowel, SEPARATOR};

/// How two adjacent consonants with no vowel between them combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinPolicy {
    /// Phonetic input: adjacency alone forms a conjunct.
    Implicit,
    /// Unicode and Preeti input: only an explicit virama joins.
    Explicit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// Consonant(s) seen, vowel still open.
    Consonant,
    /// Virama seen after a consonant.
    Joining,
    /// Vowel decided; only a modifier may still attach.
    Vowel,
    /// Modifier attached.
    Closed,
}

/// Folds units into clusters in one left-to-right pass with a single unit
/// of lookahead.
pub fn assemble(units: &[Unit], policy: JoinPolicy) -> Vec<Cluster> {
    let mut assembler = Assembler::new(policy);
    for (i, unit) in units.iter().enumerate() {
        assembler.feed(*unit, units.get(i + 1));
    }
    assembler.finish()
}

struct Assembler {
    policy: JoinPolicy,
    clusters: Vec<Cluster>,
    current: Option<GraphemeCluster>,
    stage: Stage,
}

impl Assembler {
    fn new(policy: JoinPolicy) -> Self {
        Self { policy, clusters: Vec::new(), current: None, stage: Stage::Closed }
    }

    fn feed(&mut self, unit: Unit, next: Option<&Unit>) {
        match unit {
            Unit::Consonant(ch) => self.consonant(ch),
            Unit::Nukta => match (self.current.as_mut(), self.stage) {
                (Some(cluster), Stage::Consonant) => {
                    if let Some(letter) = cluster.last_letter_mut() {
                        letter.nukta = true;
                    }
                }
                _ => self.orphan(unit),
            },
            Unit::Virama => {
                if self.current.is_some() && self.stage == Stage::Consonant {
                    self.stage = Stage::Joining;
                } else {
                    self.orphan(unit);
                }
            }
            Unit::Vowel(vowel) => self.context_vowel(vowel),
            Unit::Independent(vowel) => {
                self.open(GraphemeCluster::independent(vowel), Stage::Vowel)
            }
            Unit::Sign(vowel) => match (self.current.as_mut(), self.stage) {
                (Some(cluster), Stage::Consonant | Stage::Joining) => {
                    cluster.vowel = Some(vowel);
                    self.stage = Stage::Vowel;
                }
                _ => self.orphan(unit),
            },
            Unit::Modifier(modifier) => match (self.current.as_mut(), self.stage) {
                (Some(cluster), Stage::Consonant | Stage::Vowel) => {
                    cluster.modifier = Some(modifier);
                    self.stage = Stage::Closed;
                }
                _ => self.orphan(unit),
            },
            // Inside a cluster the separator only breaks the key.
            Unit::Separator if next.is_some_and(|n| self.continues_cluster(n)) => {}
            Unit::Separator => {
                let follows_script = self.current.is_some()
                    || matches!(self.clusters.last(), Some(Cluster::Grapheme(_)));
                let precedes_script = next.is_some_and(Unit::is_script);
                self.flush();
                if !(follows_script && precedes_script) {
                    self.clusters.push(Cluster::Literal(SEPARATOR));
                }
            }
            Unit::Symbol(symbol) => {
                self.flush();
                self.clusters.push(Cluster::Symbol(symbol));
            }
            Unit::Literal(ch) => {
                self.flush();
                self.clusters.push(Cluster::Literal(ch));
            }
        }
    }

    /// Whether `next` would attach to the open cluster.
    fn continues_cluster(&self, next: &Unit) -> bool {
        if self.current.is_none() {
            return false;
        }
        match (self.stage, next) {
            (
                Stage::Consonant,
                Unit::Vowel(_) | Unit::Sign(_) | Unit::Modifier(_) | Unit::Nukta | Unit::Virama,
            ) => true,
            (Stage::Vowel, Unit::Modifier(_)) => true,
            _ => false,
        }
    }

    fn consonant(&mut self, ch: char) {
        let joins = match self.stage {
            Stage::Joining => true,
            Stage::Consonant => self.policy == JoinPolicy::Implicit,
            Stage::Vowel | Stage::Closed => false,
        };
        match self.current.as_mut() {
            Some(cluster) if joins => {
                cluster.conjuncts.push(Letter::plain(ch));
                self.stage = Stage::Consonant;
            }
            _ => self.open(GraphemeCluster::consonant(ch), Stage::Consonant),
        }
    }

    fn context_vowel(&mut self, vowel: Vowel) {
        match (self.current.as_mut(), self.stage) {
            (Some(cluster), Stage::Consonant) => {
                cluster.vowel = (vowel != Vowel::A).then_some(vowel);
                self.stage = Stage::Vowel;
            }
            _ => self.open(GraphemeCluster::independent(vowel), Stage::Vowel),
        }
    }

    fn open(&mut self, cluster: GraphemeCluster, stage: Stage) {
        self.flush();
        self.current = Some(cluster);
        self.stage = stage;
    }

    fn orphan(&mut self, unit: Unit) {
        self.flush();
        self.clusters.push(Cluster::Mark(unit));
    }

    fn flush(&mut self) {
        if let Some(mut cluster) = self.current.take() {
            if self.stage == Stage::Joining {
                cluster.halanta = true;
            }
            self.clusters.push(Cluster::Grapheme(cluster));
        }
        self.stage = Stage::Closed;
    }

    fn finish(mut self) -> Vec<Cluster> {
        self.flush();
        self.clusters
    }
}
