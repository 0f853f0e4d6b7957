#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(state) = moltke::GameState::from_slice(data) {
        // decode guarantees: both layers sized to the grid, and rendering a
        // decoded state never fails
        let size = state.grid.width as usize * state.grid.height as usize;
        assert_eq!(state.grid.first_layer.len(), size);
        assert_eq!(state.grid.second_layer.len(), size);

        for unit in &state.entities.units {
            assert!(unit.task.len() <= data.len());
        }

        let mut renderer = moltke::TextRenderer::new(Vec::new());
        renderer.write_state(&state).unwrap();
    }
});
