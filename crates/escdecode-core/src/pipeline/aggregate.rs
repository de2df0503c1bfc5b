use time::Duration;

use crate::Sample;

/// Consecutive samples believed to belong to one ESC command.
///
/// Never empty: a group is always opened with its first sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacketGroup {
    samples: Vec<Sample>,
}

impl PacketGroup {
    fn new(first: Sample) -> Self {
        Self {
            samples: vec![first],
        }
    }

    fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first_timestamp(&self) -> Duration {
        self.samples[0].timestamp
    }

    pub fn last_timestamp(&self) -> Duration {
        self.samples[self.samples.len() - 1].timestamp
    }

    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }
}

/// Groups samples into packets by inter-sample gap.
///
/// A sample joins the open group when its distance to the previous sample is
/// at most the threshold; otherwise the open group is emitted and a new one
/// starts. Samples are never reordered. An upstream error is yielded once and
/// ends the sequence; the open group is dropped with it.
pub struct PacketAggregator<I> {
    samples: I,
    threshold: Duration,
    open: Option<PacketGroup>,
    done: bool,
}

impl<I> PacketAggregator<I> {
    pub fn new(samples: I, threshold: Duration) -> Self {
        Self {
            samples,
            threshold,
            open: None,
            done: false,
        }
    }
}

impl<I, E> Iterator for PacketAggregator<I>
where
    I: Iterator<Item = Result<Sample, E>>,
{
    type Item = Result<PacketGroup, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let sample = match self.samples.next() {
                Some(Ok(sample)) => sample,
                Some(Err(err)) => {
                    self.done = true;
                    self.open = None;
                    return Some(Err(err));
                }
                None => {
                    self.done = true;
                    return self.open.take().map(Ok);
                }
            };

            let joins = self
                .open
                .as_ref()
                .is_some_and(|group| sample.timestamp - group.last_timestamp() <= self.threshold);
            if joins {
                if let Some(group) = self.open.as_mut() {
                    group.push(sample);
                }
                continue;
            }
            if let Some(closed) = self.open.replace(PacketGroup::new(sample)) {
                return Some(Ok(closed));
            }
        }
    }
}
