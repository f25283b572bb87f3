//! Function tables whose entries must not be called.
//!
//! Tests override the entries they exercise with struct update syntax:
//! `UnitCApi { name_hash, ..testing::unit() }`. Calling a stub aborts.

use crate::capi::*;

extern "C" fn stub0<R>() -> R {
    unreachable!("unexpected native call")
}

extern "C" fn stub1<A, R>(_: A) -> R {
    unreachable!("unexpected native call")
}

extern "C" fn stub2<A, B, R>(_: A, _: B) -> R {
    unreachable!("unexpected native call")
}

extern "C" fn stub3<A, B, C, R>(_: A, _: B, _: C) -> R {
    unreachable!("unexpected native call")
}

extern "C" fn stub4<A, B, C, D, R>(_: A, _: B, _: C, _: D) -> R {
    unreachable!("unexpected native call")
}

extern "C" fn stub5<A, B, C, D, E, R>(_: A, _: B, _: C, _: D, _: E) -> R {
    unreachable!("unexpected native call")
}

extern "C" fn stub6<A, B, C, D, E, F, R>(_: A, _: B, _: C, _: D, _: E, _: F) -> R {
    unreachable!("unexpected native call")
}

extern "C" fn stub7<A, B, C, D, E, F, G, R>(_: A, _: B, _: C, _: D, _: E, _: F, _: G) -> R {
    unreachable!("unexpected native call")
}

#[allow(clippy::too_many_arguments)]
extern "C" fn stub9<A, B, C, D, E, F, G, H, I, R>(
    _: A,
    _: B,
    _: C,
    _: D,
    _: E,
    _: F,
    _: G,
    _: H,
    _: I,
) -> R {
    unreachable!("unexpected native call")
}

pub fn application() -> ApplicationCApi {
    ApplicationCApi {
        num_worlds: stub0,
        world: stub1,
        worlds: stub1,
        new_world: stub1,
        main_world: stub0,
        release_world: stub1,
        render_world: stub5,
        build: stub0,
        platform: stub0,
        build_identifier: stub0,
        sysinfo: stub0,
        create_viewport: stub2,
        destroy_viewport: stub2,
        time_since_launch: stub0,
        sleep: stub1,
        get_time_step_policy: stub0,
        quit: stub1,
        argv: stub2,
    }
}

pub fn world() -> WorldCApi {
    WorldCApi {
        spawn_unit: stub4,
        destroy_unit: stub2,
        num_units: stub1,
        unit_by_name: stub2,
        unit_by_id: stub2,
        unit_by_index: stub2,
        num_units_by_resource: stub2,
        units_by_resource: stub3,
        link_unit: stub5,
        unlink_unit: stub2,
        update_unit: stub2,
        create_particles: stub3,
        destroy_particles: stub2,
        stop_spawning_particles: stub2,
        are_particles_playing: stub2,
        move_particles: stub3,
        link_particles: stub6,
        load_level: stub3,
        destroy_level: stub2,
        num_levels: stub1,
        level: stub2,
        update: stub2,
        update_animations: stub2,
        update_scene: stub2,
        delta_time: stub1,
        time: stub1,
        create_shading_environment: stub2,
        create_default_shading_environment: stub1,
        destroy_shading_environment: stub2,
        set_shading_environment: stub3,
        create_screen_gui: stub1,
        create_world_gui: stub4,
        destroy_gui: stub2,
        debug_camera_pose: stub1,
    }
}

pub fn unit() -> UnitCApi {
    UnitCApi {
        local_position: stub2,
        local_rotation: stub2,
        local_scale: stub2,
        local_pose: stub2,
        set_local_position: stub3,
        set_local_rotation: stub3,
        set_local_scale: stub3,
        set_local_pose: stub3,
        world_position: stub2,
        world_rotation: stub2,
        world_pose: stub2,
        teleport_local_position: stub3,
        delta_position: stub2,
        num_actors: stub1,
        find_actor: stub2,
        actor: stub2,
        create_actor: stub2,
        destroy_actor: stub2,
        num_movers: stub1,
        set_mover: stub2,
        set_mover_to_none: stub1,
        mover: stub1,
        mover_fits_at: stub3,
        trigger_flow_event: stub2,
        bones: stub1,
        animation_root_mode: stub1,
        set_animation_root_mode: stub2,
        crossfade_animation: stub5,
        animation_find_variable: stub2,
        animation_get_variable: stub2,
        animation_set_variable: stub3,
        animation_get_state: stub1,
        animation_set_state: stub2,
        animation_get_seeds: stub1,
        animation_set_seeds: stub2,
        animation_layer_info: stub2,
        animation_get_curve_value: stub5,
        num_lod_objects: stub1,
        find_lod_object: stub2,
        lod_object: stub2,
        num_steps_lod: stub1,
        lod_step_range: stub3,
        set_property: stub4,
        get_property: stub3,
        set_unit_visibility: stub2,
        has_node: stub2,
        node: stub2,
        world: stub1,
        level: stub1,
        is_alive: stub1,
        id_in_level: stub1,
        r#box: stub1,
        debug_name: stub1,
        name_hash: stub2,
        mesh_raycast: stub7,
        mesh_pick_raycast: stub9,
        mesh_closest_point_raycast: stub7,
    }
}

pub fn camera() -> CameraCApi {
    CameraCApi {
        local_position: stub1,
        local_rotation: stub1,
        local_scale: stub1,
        local_pose: stub1,
        set_local_position: stub2,
        set_local_rotation: stub2,
        set_local_scale: stub2,
        set_local_pose: stub2,
        set_local: stub2,
        world_position: stub1,
        world_rotation: stub1,
        world_pose: stub1,
        near_range: stub1,
        far_range: stub1,
        set_near_range: stub2,
        set_far_range: stub2,
        vertical_fov: stub1,
        set_vertical_fov: stub2,
        projection_type: stub1,
        set_projection_type: stub2,
        set_orthographic_view: stub5,
        set_frustum: stub5,
        inside_frustum: stub3,
        mode: stub1,
        set_mode: stub2,
        screen_to_world: stub3,
    }
}

pub fn window() -> WindowCApi {
    WindowCApi {
        has_mouse_focus: stub1,
        has_focus: stub1,
        set_mouse_focus: stub2,
        set_focus: stub1,
        show_cursor: stub1,
        set_show_cursor: stub2,
        clip_cursor: stub1,
        set_clip_cursor: stub2,
        set_cursor: stub2,
        is_resizable: stub1,
        set_resizable: stub2,
        set_resolution: stub3,
        get_dpi_scale: stub1,
        set_title: stub2,
        get_main_window: stub0,
        minimize: stub1,
        maximize: stub1,
        restore: stub1,
        is_closing: stub1,
        close: stub1,
        set_keystroke_enabled: stub3,
        id: stub1,
        rect: stub1,
        set_rect: stub2,
        open: stub1,
        fill_default_open_parameter: stub1,
    }
}

pub fn level() -> LevelCApi {
    LevelCApi {
        world: stub1,
        spawn_background: stub1,
        unit_by_index: stub2,
        unit_index: stub2,
        num_units: stub1,
        num_nested_levels: stub1,
        nested_level: stub2,
        random_point_inside_volume: stub2,
        is_point_inside_volume: stub3,
        has_volume: stub2,
        trigger_event: stub2,
        trigger_level_loaded: stub1,
        trigger_level_shutdown: stub1,
        trigger_level_update: stub1,
        pose: stub1,
        r#box: stub1,
    }
}

pub fn input() -> InputCApi {
    InputCApi {
        num_pads: stub0,
        num_touch_panels: stub0,
        flush_controllers_state: stub0,
        keyboard: stub0,
        mouse: stub0,
        tablet: stub0,
        touch_panel: stub1,
        pad: stub1,
    }
}

pub fn input_controller() -> InputControllerCApi {
    InputControllerCApi {
        name: stub1,
        num_buttons: stub1,
        button: stub2,
        pressed: stub2,
        released: stub2,
        any_pressed: stub1,
        any_released: stub1,
        set_down_threshold: stub2,
        down_threshold: stub1,
        num_axes: stub1,
        axis: stub3,
        dead_zone: stub3,
        set_dead_zone: stub3,
        set_rumble_enabled: stub2,
        num_rumble_motors: stub1,
        set_rumble: stub3,
        rumble_effect: stub3,
        stop_rumble_effect: stub3,
        is_rumble_effect_playing: stub3,
        stop_all_rumble_effects: stub2,
        button_name: stub2,
        button_id: stub2,
        axis_name: stub2,
        axis_id: stub2,
        active: stub1,
        connected: stub1,
        disconnected: stub1,
    }
}

pub fn gui() -> GuiCApi {
    GuiCApi {
        material: stub2,
        rect: stub5,
        update_rect: stub6,
        destroy_rect: stub2,
        bitmap: stub6,
        update_bitmap: stub9,
        destroy_bitmap: stub2,
        text: stub7,
        destroy_text: stub2,
        set_visible: stub2,
        is_visible: stub1,
        resolution: stub4,
    }
}

pub fn dynamic_data<T>() -> DynamicScriptDataCApi<T> {
    DynamicScriptDataCApi {
        set_data: stub4,
        has_data: stub3,
        get_data: stub3,
    }
}

/// A full [`ScriptApi`](crate::ScriptApi) of stubs.
pub fn script_api() -> crate::ScriptApi {
    crate::ScriptApi {
        application: application(),
        world: world(),
        unit: unit(),
        camera: camera(),
        window: window(),
        level: level(),
        input: input(),
        input_controller: input_controller(),
        gui: gui(),
        unit_data: dynamic_data(),
        world_data: dynamic_data(),
        level_data: dynamic_data(),
        camera_data: dynamic_data(),
    }
}
