//! Thin façade over the one collective operation this subsystem performs.
//!
//! The partitioning engine is communication-free except for a single
//! element-wise sum all-reduce, executed once per distributed-mesh build
//! when virtual-cell IDs are assigned. Backends only have to supply that:
//! a serial no-op ([`NoComm`]), an in-process multi-rank backend for tests
//! ([`LocalComm`]), and MPI ([`MpiComm`], behind the `mpi-support` feature).

use bytes::Bytes;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU64, Ordering};

/// Collective-communication interface (minimal by design).
pub trait Communicator {
    /// This process's rank in `0..size`.
    fn rank(&self) -> usize;
    /// Number of participating processes.
    fn size(&self) -> usize;
    /// Element-wise sum of `local` across all ranks; every rank receives
    /// the full result. Blocking, barrier-style: every rank of the group
    /// must call it, with equal-length input.
    fn all_reduce_sum(&self, local: &[u64]) -> Vec<u64>;
}

/// Compile-time no-op comm for pure serial runs and unit tests.
#[derive(Clone, Debug, Default)]
pub struct NoComm;

impl Communicator for NoComm {
    fn rank(&self) -> usize {
        0
    }
    fn size(&self) -> usize {
        1
    }
    fn all_reduce_sum(&self, local: &[u64]) -> Vec<u64> {
        local.to_vec()
    }
}

// --- LocalComm: in-process multi-rank backend ---

// (src, dst, collective sequence number)
type Key = (usize, usize, u64);

static MAILBOX: Lazy<DashMap<Key, Bytes>> = Lazy::new(DashMap::new);

/// In-process communicator: each rank lives on its own thread and ranks
/// exchange contributions through a process-global mailbox.
///
/// SPMD assumption: all ranks of a group issue the same sequence of
/// collectives, so the per-instance sequence counters stay in lockstep.
/// Each posted entry is addressed to one destination and removed on
/// receipt, so the mailbox drains completely; tests that share it still
/// run serially (see `serial_test`) to keep sequence numbers of unrelated
/// groups from colliding.
#[derive(Debug)]
pub struct LocalComm {
    rank: usize,
    size: usize,
    seq: AtomicU64,
}

impl LocalComm {
    pub fn new(rank: usize, size: usize) -> Self {
        Self {
            rank,
            size,
            seq: AtomicU64::new(0),
        }
    }
}

impl Communicator for LocalComm {
    fn rank(&self) -> usize {
        self.rank
    }
    fn size(&self) -> usize {
        self.size
    }

    fn all_reduce_sum(&self, local: &[u64]) -> Vec<u64> {
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        let payload = Bytes::copy_from_slice(bytemuck::cast_slice(local));
        for dst in 0..self.size {
            MAILBOX.insert((self.rank, dst, seq), payload.clone());
        }
        let mut sum = vec![0u64; local.len()];
        for src in 0..self.size {
            let bytes = loop {
                if let Some((_, v)) = MAILBOX.remove(&(src, self.rank, seq)) {
                    break v;
                }
                std::thread::yield_now();
            };
            // Bytes gives no alignment guarantee; collect through a copy.
            let contribution: Vec<u64> = bytemuck::pod_collect_to_vec(&bytes[..]);
            for (acc, x) in sum.iter_mut().zip(contribution) {
                *acc += x;
            }
        }
        sum
    }
}

// --- MPI backend (feature = "mpi-support") ---
#[cfg(feature = "mpi-support")]
mod mpi_backend {
    use super::Communicator;
    use mpi::collective::SystemOperation;
    use mpi::traits::{Communicator as MpiCommunicator, CommunicatorCollectives};

    /// MPI-backed communicator over an already-initialized world.
    ///
    /// The caller owns the `Universe` (and with it MPI finalization); this
    /// wrapper only carries the communicator handle it is given.
    pub struct MpiComm<C: MpiCommunicator> {
        comm: C,
        rank: usize,
        size: usize,
    }

    impl<C: MpiCommunicator> MpiComm<C> {
        pub fn new(comm: C) -> Self {
            let rank = comm.rank() as usize;
            let size = comm.size() as usize;
            Self { comm, rank, size }
        }
    }

    impl<C: MpiCommunicator> Communicator for MpiComm<C> {
        fn rank(&self) -> usize {
            self.rank
        }
        fn size(&self) -> usize {
            self.size
        }
        fn all_reduce_sum(&self, local: &[u64]) -> Vec<u64> {
            let mut out = vec![0u64; local.len()];
            self.comm
                .all_reduce_into(local, &mut out[..], SystemOperation::sum());
            out
        }
    }
}

#[cfg(feature = "mpi-support")]
pub use mpi_backend::MpiComm;
