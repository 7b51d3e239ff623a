/// Progress of a single deployment run
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Stage {
    #[display(fmt = "start")]
    Start,
    #[display(fmt = "token deployed")]
    TokenDeployed,
    #[display(fmt = "dependent deployed")]
    DependentDeployed,
    #[display(fmt = "confirmed and verified")]
    Verified,
    #[display(fmt = "done")]
    Done,
    #[display(fmt = "failed")]
    Failed,
}

impl Stage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Failed)
    }
}
