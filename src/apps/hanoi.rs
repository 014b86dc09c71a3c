use std::fmt;

use tracing::{debug, trace};

use crate::{
    error::{AdtError, Result},
    stack::Stack,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Peg {
    Source,
    Auxiliary,
    Target,
}

impl Peg {
    fn index(self) -> usize {
        match self {
            Peg::Source => 0,
            Peg::Auxiliary => 1,
            Peg::Target => 2,
        }
    }

    pub fn label(self) -> char {
        match self {
            Peg::Source => 'A',
            Peg::Auxiliary => 'B',
            Peg::Target => 'C',
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub disk: u32,
    pub from: Peg,
    pub to: Peg,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "disk {} {} -> {}", self.disk, self.from, self.to)
    }
}

/// Towers of Hanoi with one stack per peg. Disk `1` is the smallest.
#[derive(Debug)]
pub struct Hanoi {
    towers: [Stack<u32>; 3],
    disks: u32,
    moves: Vec<Move>,
}

impl Hanoi {
    /// All `disks` start on [`Peg::Source`], largest at the bottom.
    pub fn new(disks: u32) -> Self {
        let source: Stack<u32> = (1..=disks).rev().collect();

        Hanoi {
            towers: [source, Stack::new(), Stack::new()],
            disks,
            moves: Vec::new(),
        }
    }

    pub fn disks(&self) -> u32 {
        self.disks
    }

    /// Disks on `peg`, top first.
    pub fn tower(&self, peg: Peg) -> &Stack<u32> {
        &self.towers[peg.index()]
    }

    /// Moves made so far.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn is_solved(&self) -> bool {
        self.tower(Peg::Target).len() as u32 == self.disks
    }

    /// Puts every disk back on [`Peg::Source`] and forgets the moves.
    pub fn reset(&mut self) {
        *self = Hanoi::new(self.disks);
    }

    /// Moves the top disk of `from` onto `to`, refusing to place it on a
    /// smaller disk.
    pub fn move_disk(&mut self, from: Peg, to: Peg) -> Result<Move> {
        let step = self.shift(from, to)?;
        self.moves.push(step);
        Ok(step)
    }

    fn shift(&mut self, from: Peg, to: Peg) -> Result<Move> {
        let disk = *self.towers[from.index()]
            .peek()
            .ok_or(AdtError::EmptyPeg(from.label()))?;

        if let Some(&onto) = self.towers[to.index()].peek() {
            if onto < disk {
                return Err(AdtError::IllegalMove { disk, onto });
            }
        }

        self.towers[from.index()].pop();
        self.towers[to.index()].push(disk);

        let step = Move { disk, from, to };
        trace!(%step, "moved");
        Ok(step)
    }

    /// Starts over from the initial layout and moves the whole tower to
    /// [`Peg::Target`] in the minimum `2^n - 1` moves, which are returned.
    pub fn solve(&mut self) -> Result<&[Move]> {
        let mut moves = Vec::new();
        self.solve_with(|step| {
            moves.push(step);
            Ok(())
        })?;
        self.moves = moves;
        Ok(&self.moves)
    }

    /// Like [`Hanoi::solve`] but hands each move to `visit` instead of
    /// keeping it, so big towers run in constant memory. Returns the number
    /// of moves; [`Hanoi::moves`] is left empty.
    pub fn solve_with<F>(&mut self, mut visit: F) -> Result<u64>
    where
        F: FnMut(Move) -> Result<()>,
    {
        self.reset();

        let mut count = 0;
        let mut counted = |step: Move| {
            count += 1;
            visit(step)
        };
        self.solve_recursive(
            self.disks,
            Peg::Source,
            Peg::Target,
            Peg::Auxiliary,
            &mut counted,
        )?;

        debug!(disks = self.disks, moves = count, "solved");
        Ok(count)
    }

    fn solve_recursive<F>(
        &mut self,
        n: u32,
        from: Peg,
        to: Peg,
        via: Peg,
        visit: &mut F,
    ) -> Result<()>
    where
        F: FnMut(Move) -> Result<()>,
    {
        if n == 0 {
            return Ok(());
        }

        self.solve_recursive(n - 1, from, via, to, visit)?;
        visit(self.shift(from, to)?)?;
        self.solve_recursive(n - 1, via, to, from, visit)
    }
}
