//! Remote data-acquisition scopes.

use std::os::raw::c_int;

use crate::decode::{encode, id_buffer, latin1, string_buffer, until_sentinel};
use crate::error::Result;
use crate::model::Signal;
use crate::raw::{MAX_SCOPES, SCMODE, SCST, SCTYPE, TRIGMD, TRIGSLOPE};
use crate::session::XpcApi;

/// Handle to one scope on the target, identified by its id.
///
/// The handle holds no session state; every call goes through the
/// [`XpcApi`] passed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Scope {
    id: i32,
}

impl XpcApi {
    /// Ids of every scope defined on the target, in target order.
    pub fn scopes(&self) -> Result<Vec<Scope>> {
        let mut ids = id_buffer(MAX_SCOPES as usize + 1);
        unsafe { self.raw().getScopes(ids.as_mut_ptr()) }?;
        Ok(until_sentinel(&ids).into_iter().map(Scope::new).collect())
    }

    /// Handle to an existing scope.
    pub fn scope(&self, id: i32) -> Scope {
        Scope::new(id)
    }

    /// Create a scope of `kind`.
    ///
    /// Without an explicit id the new scope gets one more than the largest
    /// existing id, or 1 when there are none.
    pub fn add_scope(&self, kind: SCTYPE, id: Option<i32>) -> Result<Scope> {
        let id = match id {
            Some(id) => id,
            None => self.scopes()?.iter().map(Scope::id).max().unwrap_or(0) + 1,
        };
        self.raw().addScope(kind.into(), id)?;
        log::debug!("added {kind:?} scope {id}");
        Ok(Scope::new(id))
    }

    pub fn remove_scope(&self, scope: Scope) -> Result<()> {
        self.raw().remScope(scope.id)
    }

    fn signal_handle(&self, index: i32) -> Result<Signal> {
        Ok(Signal::new(index, self.signal_name(index)?))
    }
}

impl Scope {
    pub fn new(id: i32) -> Self {
        Self { id }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn start(&self, api: &XpcApi) -> Result<()> {
        api.raw().scStart(self.id)
    }

    pub fn stop(&self, api: &XpcApi) -> Result<()> {
        api.raw().scStop(self.id)
    }

    pub fn is_finished(&self, api: &XpcApi) -> Result<bool> {
        Ok(api.raw().isScFinished(self.id)? != 0)
    }

    pub fn start_time(&self, api: &XpcApi) -> Result<f64> {
        api.raw().scGetStartTime(self.id)
    }

    pub fn auto_restart(&self, api: &XpcApi) -> Result<bool> {
        Ok(api.raw().scGetAutoRestart(self.id)? != 0)
    }

    pub fn set_auto_restart(&self, api: &XpcApi, enabled: bool) -> Result<()> {
        api.raw().scSetAutoRestart(self.id, c_int::from(enabled))
    }

    pub fn decimation(&self, api: &XpcApi) -> Result<i32> {
        api.raw().scGetDecimation(self.id)
    }

    pub fn set_decimation(&self, api: &XpcApi, decimation: i32) -> Result<()> {
        api.raw().scSetDecimation(self.id, decimation)
    }

    pub fn num_samples(&self, api: &XpcApi) -> Result<i32> {
        api.raw().scGetNumSamples(self.id)
    }

    pub fn set_num_samples(&self, api: &XpcApi, samples: i32) -> Result<()> {
        api.raw().scSetNumSamples(self.id, samples)
    }

    pub fn num_pre_post_samples(&self, api: &XpcApi) -> Result<i32> {
        api.raw().scGetNumPrePostSamples(self.id)
    }

    pub fn set_num_pre_post_samples(&self, api: &XpcApi, samples: i32) -> Result<()> {
        api.raw().scSetNumPrePostSamples(self.id, samples)
    }

    /// Signals acquired by this scope.
    pub fn signals(&self, api: &XpcApi) -> Result<Vec<Signal>> {
        let data = api.raw().getScope(self.id)?;
        until_sentinel(&data.signals)
            .into_iter()
            .map(|index| api.signal_handle(index))
            .collect()
    }

    pub fn add_signal(&self, api: &XpcApi, signal: i32) -> Result<()> {
        api.raw().scAddSignal(self.id, signal)
    }

    pub fn remove_signal(&self, api: &XpcApi, signal: i32) -> Result<()> {
        api.raw().scRemSignal(self.id, signal)
    }

    pub fn scope_type(&self, api: &XpcApi) -> Result<SCTYPE> {
        SCTYPE::try_from(api.raw().scGetType(self.id)?)
    }

    pub fn state(&self, api: &XpcApi) -> Result<SCST> {
        SCST::try_from(api.raw().scGetState(self.id)?)
    }

    pub fn trigger_mode(&self, api: &XpcApi) -> Result<TRIGMD> {
        TRIGMD::try_from(api.raw().scGetTriggerMode(self.id)?)
    }

    pub fn set_trigger_mode(&self, api: &XpcApi, mode: TRIGMD) -> Result<()> {
        api.raw().scSetTriggerMode(self.id, mode.into())
    }

    /// The scope this one triggers on.
    pub fn trigger_scope(&self, api: &XpcApi) -> Result<Scope> {
        Ok(Scope::new(api.raw().scGetTriggerScope(self.id)?))
    }

    pub fn set_trigger_scope(&self, api: &XpcApi, source: Scope) -> Result<()> {
        api.raw().scSetTriggerScope(self.id, source.id)
    }

    pub fn trigger_scope_sample(&self, api: &XpcApi) -> Result<i32> {
        api.raw().scGetTriggerScopeSample(self.id)
    }

    pub fn set_trigger_scope_sample(&self, api: &XpcApi, sample: i32) -> Result<()> {
        api.raw().scSetTriggerScopeSample(self.id, sample)
    }

    /// The trigger signal, `None` when the scope has none.
    pub fn trigger_signal(&self, api: &XpcApi) -> Result<Option<Signal>> {
        match api.raw().scGetTriggerSignal(self.id)? {
            -1 => Ok(None),
            index => api.signal_handle(index).map(Some),
        }
    }

    pub fn set_trigger_signal(&self, api: &XpcApi, signal: i32) -> Result<()> {
        api.raw().scSetTriggerSignal(self.id, signal)
    }

    pub fn trigger_slope(&self, api: &XpcApi) -> Result<TRIGSLOPE> {
        TRIGSLOPE::try_from(api.raw().scGetTriggerSlope(self.id)?)
    }

    pub fn set_trigger_slope(&self, api: &XpcApi, slope: TRIGSLOPE) -> Result<()> {
        api.raw().scSetTriggerSlope(self.id, slope.into())
    }

    pub fn trigger_level(&self, api: &XpcApi) -> Result<f64> {
        api.raw().scGetTriggerLevel(self.id)
    }

    pub fn set_trigger_level(&self, api: &XpcApi, level: f64) -> Result<()> {
        api.raw().scSetTriggerLevel(self.id, level)
    }

    pub fn software_trigger(&self, api: &XpcApi) -> Result<()> {
        api.raw().scSoftwareTrigger(self.id)
    }

    // file scopes

    /// Name of the file a file scope writes to.
    pub fn filename(&self, api: &XpcApi) -> Result<String> {
        let mut buf = string_buffer();
        unsafe { api.raw().fSScGetFilename(self.id, buf.as_mut_ptr()) }?;
        Ok(latin1(&buf))
    }

    pub fn set_filename(&self, api: &XpcApi, filename: &str) -> Result<()> {
        let mut name = encode(filename)?;
        unsafe { api.raw().fSScSetFilename(self.id, name.as_mut_ptr()) }
    }

    // target scopes

    /// Display mode of a target scope.
    pub fn mode(&self, api: &XpcApi) -> Result<SCMODE> {
        SCMODE::try_from(api.raw().tgScGetMode(self.id)?)
    }

    pub fn set_mode(&self, api: &XpcApi, mode: SCMODE) -> Result<()> {
        api.raw().tgScSetMode(self.id, mode.into())
    }
}
